use thiserror::Error;

use crate::video::VideoId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("repository lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("video {0} already exists")]
    DuplicateId(VideoId),
}
