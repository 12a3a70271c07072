use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::resolution::Resolution;
use super::timestamp;

pub type VideoId = i64;

/// Milliseconds since the epoch of the sample record's timestamps.
const SAMPLE_CREATED_AT_MILLIS: i64 = 1_689_609_060_188;

/// A video record as stored and as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "super::timestamp")]
    pub publication_date: DateTime<Utc>,
    pub available_resolutions: Vec<Resolution>,
}

/// Validated fields for a new video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
}

/// Validated replacement for an existing video.
///
/// `title` and `author` are always replaced. The optional fields are left
/// alone when `None`; `min_age_restriction: Some(None)` clears the restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPatch {
    pub title: String,
    pub author: String,
    pub available_resolutions: Option<Vec<Resolution>>,
    pub can_be_downloaded: Option<bool>,
    pub min_age_restriction: Option<Option<u8>>,
    pub publication_date: Option<DateTime<Utc>>,
}

impl VideoPatch {
    /// A patch touching only title and author.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            available_resolutions: None,
            can_be_downloaded: None,
            min_age_restriction: None,
            publication_date: None,
        }
    }
}

impl Video {
    /// Build a freshly created record. Publication is scheduled one day after creation.
    pub fn create(id: VideoId, new: NewVideo, now: DateTime<Utc>) -> Self {
        let created_at = timestamp::truncate(now);
        Self {
            id,
            title: new.title,
            author: new.author,
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at,
            publication_date: created_at + TimeDelta::days(1),
            available_resolutions: new.available_resolutions,
        }
    }

    /// The record a freshly started service can be seeded with.
    pub fn sample() -> Self {
        let created_at =
            DateTime::from_timestamp_millis(SAMPLE_CREATED_AT_MILLIS).unwrap_or_default();
        Self {
            id: 0,
            title: "string".to_string(),
            author: "string".to_string(),
            can_be_downloaded: true,
            min_age_restriction: None,
            created_at,
            publication_date: created_at,
            available_resolutions: vec![Resolution::P144],
        }
    }

    /// Apply a validated patch in place. `id` and `created_at` never change.
    pub fn apply(&mut self, patch: VideoPatch) {
        self.title = patch.title;
        self.author = patch.author;
        if let Some(resolutions) = patch.available_resolutions {
            self.available_resolutions = resolutions;
        }
        if let Some(can_be_downloaded) = patch.can_be_downloaded {
            self.can_be_downloaded = can_be_downloaded;
        }
        if let Some(min_age_restriction) = patch.min_age_restriction {
            self.min_age_restriction = min_age_restriction;
        }
        if let Some(publication_date) = patch.publication_date {
            self.publication_date = publication_date;
        }
    }
}
