use crate::video::{Video, VideoId};
use super::error::RepositoryError;

/// Ordered storage for video records.
///
/// Implementations keep records in insertion order and make each call atomic
/// with respect to every other call.
pub trait VideoRepository: Send + Sync {
    /// Every record, in insertion order.
    fn list(&self) -> Result<Vec<Video>, RepositoryError>;

    fn get(&self, id: VideoId) -> Result<Option<Video>, RepositoryError>;

    fn contains(&self, id: VideoId) -> Result<bool, RepositoryError> {
        Ok(self.get(id)?.is_some())
    }

    fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.list()?.len())
    }

    fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    /// Append a record. Fails with `DuplicateId` if the id is already stored.
    fn insert(&self, video: Video) -> Result<(), RepositoryError>;

    /// Build a record and append it in one step.
    ///
    /// `build` runs while the collection is locked for writing, so records
    /// appear in the order their builders ran.
    fn append_with<F>(&self, build: F) -> Result<Video, RepositoryError>
    where
        F: FnOnce() -> Video;

    /// Mutate a record in place without moving it.
    ///
    /// Returns `false` when no record has the id.
    fn update<F>(&self, id: VideoId, f: F) -> Result<bool, RepositoryError>
    where
        F: FnOnce(&mut Video);

    /// Remove a record, keeping the order of the rest. Returns `false` when absent.
    fn remove(&self, id: VideoId) -> Result<bool, RepositoryError>;

    /// Remove everything, returning how many records were dropped.
    fn clear(&self) -> Result<usize, RepositoryError>;
}
