//! The video record, its resolution tags and the inputs that create or
//! replace it.

mod id;
mod input;
mod model;
mod resolution;
pub(crate) mod timestamp;

pub use id::IdGenerator;
pub use input::{CreateVideoInput, UpdateVideoInput};
pub use model::{NewVideo, Video, VideoId, VideoPatch};
pub use resolution::{Resolution, UnknownResolution};
