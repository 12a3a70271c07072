//! Shared fixtures for the video tests.

use serde_json::{json, Value};
use video_store::{CreateVideoInput, InMemoryVideoRepository, Resolution, Video, VideoService};

pub type Service = VideoService<InMemoryVideoRepository>;

pub fn empty_service() -> Service {
    VideoService::new(InMemoryVideoRepository::new())
}

pub fn create(service: &Service, title: &str, author: &str) -> Video {
    service
        .create(&CreateVideoInput::new(title, author, &[Resolution::P144]))
        .unwrap()
}

/// `{ "errorsMessages": [ { "message": "Invalid <field>", "field": <field> } ] }`
pub fn invalid(field: &str) -> Value {
    json!({
        "errorsMessages": [
            { "message": format!("Invalid {field}"), "field": field }
        ]
    })
}
