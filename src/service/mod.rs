//! Video Collection Service: the operations the HTTP layer dispatches to.
//!
//! `VideoService<R>` owns a [`VideoRepository`](crate::VideoRepository) and an
//! id generator. It validates input, assigns ids and timestamps, and applies
//! each change as a single repository call.
//!
//! ## Quick Start
//!
//! ```
//! use video_store::{CreateVideoInput, InMemoryVideoRepository, Resolution, VideoService};
//!
//! let service = VideoService::new(InMemoryVideoRepository::new());
//! let video = service
//!     .create(&CreateVideoInput::new("First words", "Anna", &[Resolution::P1080]))
//!     .unwrap();
//!
//! assert_eq!(service.get(video.id).unwrap(), video);
//! assert_eq!(service.list().unwrap().len(), 1);
//! ```

mod error;
mod video_service;

pub use error::ServiceError;
pub use video_service::VideoService;
