//! In-memory video collection with validated CRUD over HTTP.
//!
//! The crate is layered bottom-up:
//!
//! - [`video`]: the record, its resolution tags, and raw create/replace inputs.
//! - [`validation`]: field rules producing an ordered `errorsMessages` list.
//! - [`VideoRepository`] / [`InMemoryVideoRepository`]: ordered storage.
//! - [`VideoService`]: list, get, create, replace, delete, reset.
//! - [`http`] (feature `http`): the axum router that exposes the service.

pub mod config;
#[cfg(feature = "http")]
pub mod http;
mod repository;
mod service;
pub mod validation;
pub mod video;

pub use config::{Config, ConfigError};
pub use repository::{InMemoryVideoRepository, RepositoryError, VideoRepository};
pub use service::{ServiceError, VideoService};
pub use validation::{FieldError, ValidationErrors};
pub use video::{
    CreateVideoInput, IdGenerator, NewVideo, Resolution, UpdateVideoInput, Video, VideoId,
    VideoPatch,
};
