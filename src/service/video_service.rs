use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::error::ServiceError;
use crate::repository::VideoRepository;
use crate::validation::{validate_create, validate_update};
use crate::video::{CreateVideoInput, IdGenerator, UpdateVideoInput, Video, VideoId};

/// The video collection and the operations allowed on it.
///
/// Generic over `R`, the repository type. Share it between request handlers
/// behind an `Arc`.
pub struct VideoService<R> {
    repo: R,
    ids: IdGenerator,
}

impl<R: VideoRepository> VideoService<R> {
    /// Create a service over `repo`. New ids are issued above any id the
    /// repository already holds.
    pub fn new(repo: R) -> Self {
        let highest = match repo.list() {
            Ok(videos) => videos.iter().map(|video| video.id).max().unwrap_or(0),
            Err(err) => {
                warn!(error = %err, "could not read existing ids; issuing ids from the clock");
                0
            }
        };
        Self {
            repo,
            ids: IdGenerator::starting_after(highest),
        }
    }

    /// Every video, in creation order.
    pub fn list(&self) -> Result<Vec<Video>, ServiceError> {
        Ok(self.repo.list()?)
    }

    pub fn get(&self, id: VideoId) -> Result<Video, ServiceError> {
        self.repo
            .get(id)?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    /// Validate and append a new video stamped with the current time.
    pub fn create(&self, input: &CreateVideoInput) -> Result<Video, ServiceError> {
        self.create_at(input, Utc::now())
    }

    /// Like [`create`](Self::create) with an explicit creation time.
    pub fn create_at(
        &self,
        input: &CreateVideoInput,
        now: DateTime<Utc>,
    ) -> Result<Video, ServiceError> {
        let new = validate_create(input).map_err(|errors| {
            debug!(fields = ?errors.fields(), "create rejected");
            errors
        })?;

        // The id is drawn under the repository's write lock so list order
        // follows id order.
        let video = self
            .repo
            .append_with(|| Video::create(self.ids.next_at(now.timestamp_millis()), new, now))?;
        debug!(id = video.id, title = %video.title, "video created");
        Ok(video)
    }

    /// Replace the editable fields of an existing video.
    ///
    /// An unknown id is reported before the body is looked at. A rejected body
    /// leaves every field of the stored video as it was.
    pub fn replace(&self, id: VideoId, input: &UpdateVideoInput) -> Result<(), ServiceError> {
        if !self.repo.contains(id)? {
            return Err(ServiceError::NotFound(id.to_string()));
        }

        let patch = validate_update(input).map_err(|errors| {
            debug!(id, fields = ?errors.fields(), "replace rejected");
            errors
        })?;

        if !self.repo.update(id, |video| video.apply(patch))? {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        debug!(id, "video replaced");
        Ok(())
    }

    pub fn delete(&self, id: VideoId) -> Result<(), ServiceError> {
        if !self.repo.remove(id)? {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        debug!(id, "video deleted");
        Ok(())
    }

    /// Drop every video. Ids already issued are still never reused.
    pub fn reset(&self) -> Result<(), ServiceError> {
        let removed = self.repo.clear()?;
        debug!(removed, "video collection reset");
        Ok(())
    }

    /// Get a reference to the repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
