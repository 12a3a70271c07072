use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::repository::VideoRepository;
use crate::service::{ServiceError, VideoService};
use crate::video::{CreateVideoInput, UpdateVideoInput, Video, VideoId};

type SharedService<R> = State<Arc<VideoService<R>>>;

/// Path ids that are not integers cannot name a video.
fn parse_id(raw: &str) -> Result<VideoId, ServiceError> {
    raw.parse()
        .map_err(|_| ServiceError::NotFound(raw.to_string()))
}

/// `GET /health`: returns `{ "ok": true, "videos": <count> }`.
pub(super) async fn health<R: VideoRepository + 'static>(
    State(service): SharedService<R>,
) -> Result<impl IntoResponse, ServiceError> {
    let videos = service.repo().len()?;
    Ok(Json(json!({ "ok": true, "videos": videos })))
}

/// `GET /videos`
pub(super) async fn list_videos<R: VideoRepository + 'static>(
    State(service): SharedService<R>,
) -> Result<Json<Vec<Video>>, ServiceError> {
    Ok(Json(service.list()?))
}

/// `GET /videos/:id`
pub(super) async fn get_video<R: VideoRepository + 'static>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> Result<Json<Video>, ServiceError> {
    let id = parse_id(&id)?;
    Ok(Json(service.get(id)?))
}

/// `POST /videos`: the body is read raw so malformed JSON becomes field errors.
pub(super) async fn create_video<R: VideoRepository + 'static>(
    State(service): SharedService<R>,
    body: Bytes,
) -> Result<impl IntoResponse, ServiceError> {
    let input = CreateVideoInput::from_slice(&body);
    let video = service.create(&input)?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// `PUT /videos/:id`
pub(super) async fn replace_video<R: VideoRepository + 'static>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ServiceError> {
    let id = parse_id(&id)?;
    service.replace(id, &UpdateVideoInput::from_slice(&body))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /videos/:id`
pub(super) async fn delete_video<R: VideoRepository + 'static>(
    State(service): SharedService<R>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    let id = parse_id(&id)?;
    service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /testing/all-data`
pub(super) async fn reset_all<R: VideoRepository + 'static>(
    State(service): SharedService<R>,
) -> Result<StatusCode, ServiceError> {
    service.reset()?;
    Ok(StatusCode::NO_CONTENT)
}
