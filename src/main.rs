use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_store::{http, Config, InMemoryVideoRepository, VideoService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,video_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting video_store v{}", env!("CARGO_PKG_VERSION"));

    let repo = if config.seed_sample_video {
        InMemoryVideoRepository::seeded()
    } else {
        InMemoryVideoRepository::new()
    };
    let service = Arc::new(VideoService::new(repo));

    http::serve_with_shutdown(service, &config.bind_addr(), shutdown_signal()).await?;
    tracing::info!("video_store stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
