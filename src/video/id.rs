use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use super::model::VideoId;

/// Issues video ids from the wall clock in milliseconds.
///
/// Two ids requested within the same millisecond (or after the clock steps
/// backwards) are bumped past the last issued value, so ids stay unique and
/// strictly increasing for the lifetime of the generator.
#[derive(Debug)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// A generator whose ids are all greater than `last`.
    pub fn starting_after(last: VideoId) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }

    pub fn next_id(&self) -> VideoId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&self, now_millis: i64) -> VideoId {
        let bump = |last: i64| now_millis.max(last.saturating_add(1));
        match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(bump(last)))
        {
            Ok(previous) | Err(previous) => bump(previous),
        }
    }
}
