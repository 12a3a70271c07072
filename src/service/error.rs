//! Error types for video service operations.

use thiserror::Error;

use crate::repository::RepositoryError;
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No video has this id. Carries the id as it was requested.
    #[error("video not found: {0}")]
    NotFound(String),
    /// The input was rejected; nothing was changed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::Validation(_) => 400,
            ServiceError::Repository(_) => 500,
        }
    }
}
