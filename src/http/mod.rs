//! HTTP transport: maps REST requests onto [`VideoService`] operations.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /videos`: every video, creation order.
//! - `GET /videos/:id`: one video, or `404`.
//! - `POST /videos`: create; `201` with the video, or `400` with `errorsMessages`.
//! - `PUT /videos/:id`: replace; `204`, `404`, or `400`.
//! - `DELETE /videos/:id`: `204` or `404`.
//! - `DELETE /testing/all-data`: clear the collection, `204`.
//! - `GET /health`: `{ "ok": true, "videos": <count> }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use video_store::{http, InMemoryVideoRepository, VideoService};
//!
//! let service = Arc::new(VideoService::new(InMemoryVideoRepository::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone());
//!
//! // Or serve directly
//! http::serve(service, "0.0.0.0:3000").await?;
//! ```

mod handlers;
mod response;

use std::future::Future;
use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::repository::VideoRepository;
use crate::service::VideoService;

/// Build an axum `Router` serving the video collection held by `service`.
pub fn router<R: VideoRepository + 'static>(service: Arc<VideoService<R>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::<R>))
        .route(
            "/videos",
            get(handlers::list_videos::<R>).post(handlers::create_video::<R>),
        )
        .route(
            "/videos/:id",
            get(handlers::get_video::<R>)
                .put(handlers::replace_video::<R>)
                .delete(handlers::delete_video::<R>),
        )
        .route("/testing/all-data", delete(handlers::reset_all::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<R: VideoRepository + 'static>(
    service: Arc<VideoService<R>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    serve_with_shutdown(service, addr, std::future::pending()).await
}

/// Like [`serve`], returning once `shutdown` resolves and in-flight requests finish.
pub async fn serve_with_shutdown<R, F>(
    service: Arc<VideoService<R>>,
    addr: &str,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    R: VideoRepository + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "video_store listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
