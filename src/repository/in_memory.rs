//! InMemoryVideoRepository - Vec-backed video storage for the process lifetime.

use std::sync::{Arc, RwLock};

use super::{RepositoryError, VideoRepository};
use crate::video::{Video, VideoId};

/// In-memory repository backed by a single ordered `Vec`.
///
/// Reads take the read lock, every mutation takes the write lock for its
/// whole duration. Clone-friendly via Arc: clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryVideoRepository {
    storage: Arc<RwLock<Vec<Video>>>,
}

impl InMemoryVideoRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with `videos`, kept in the given order.
    ///
    /// Later duplicates of an id are dropped.
    pub fn with_videos(videos: Vec<Video>) -> Self {
        let mut unique: Vec<Video> = Vec::with_capacity(videos.len());
        for video in videos {
            if !unique.iter().any(|existing| existing.id == video.id) {
                unique.push(video);
            }
        }
        Self {
            storage: Arc::new(RwLock::new(unique)),
        }
    }

    /// A repository holding only [`Video::sample`].
    pub fn seeded() -> Self {
        Self::with_videos(vec![Video::sample()])
    }
}

impl VideoRepository for InMemoryVideoRepository {
    fn list(&self) -> Result<Vec<Video>, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.clone())
    }

    fn get(&self, id: VideoId) -> Result<Option<Video>, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.iter().find(|video| video.id == id).cloned())
    }

    fn contains(&self, id: VideoId) -> Result<bool, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.iter().any(|video| video.id == id))
    }

    fn len(&self) -> Result<usize, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.len())
    }

    fn insert(&self, video: Video) -> Result<(), RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        if storage.iter().any(|existing| existing.id == video.id) {
            return Err(RepositoryError::DuplicateId(video.id));
        }
        storage.push(video);
        Ok(())
    }

    fn append_with<F>(&self, build: F) -> Result<Video, RepositoryError>
    where
        F: FnOnce() -> Video,
    {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        let video = build();
        if storage.iter().any(|existing| existing.id == video.id) {
            return Err(RepositoryError::DuplicateId(video.id));
        }
        storage.push(video.clone());
        Ok(video)
    }

    fn update<F>(&self, id: VideoId, f: F) -> Result<bool, RepositoryError>
    where
        F: FnOnce(&mut Video),
    {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        match storage.iter_mut().find(|video| video.id == id) {
            Some(video) => {
                f(video);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, id: VideoId) -> Result<bool, RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        match storage.iter().position(|video| video.id == id) {
            Some(index) => {
                storage.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&self) -> Result<usize, RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        let removed = storage.len();
        storage.clear();
        Ok(removed)
    }
}
