//! Input validation for create and replace.
//!
//! Validators never stop at the first failure: every field is checked and the
//! failures are reported together, one [`FieldError`] per field, in a fixed
//! order (title, author, availableResolutions, canBeDownloaded,
//! minAgeRestriction, publicationDate).
//!
//! ## Wire shape
//!
//! ```json
//! { "errorsMessages": [ { "message": "Invalid title", "field": "title" } ] }
//! ```

pub mod rules;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::video::{CreateVideoInput, NewVideo, UpdateVideoInput, VideoPatch};

/// Wire names of the validated fields.
pub mod field {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const AVAILABLE_RESOLUTIONS: &str = "availableResolutions";
    pub const CAN_BE_DOWNLOADED: &str = "canBeDownloaded";
    pub const MIN_AGE_RESTRICTION: &str = "minAgeRestriction";
    pub const PUBLICATION_DATE: &str = "publicationDate";
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

impl FieldError {
    /// `Invalid <field>` for the named field.
    pub fn invalid(field: &str) -> Self {
        Self {
            message: format!("Invalid {field}"),
            field: field.to_string(),
        }
    }
}

/// Every rejected field of one request, in validation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("invalid fields: {}", field_list(.errors_messages))]
pub struct ValidationErrors {
    pub errors_messages: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors_messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors_messages.len()
    }

    /// Names of the rejected fields, in order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors_messages
            .iter()
            .map(|error| error.field.as_str())
            .collect()
    }
}

fn field_list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accumulates rule failures while keeping the successful values.
#[derive(Default)]
struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.push(error);
                None
            }
        }
    }

    /// Run `rule` only when the field was sent.
    fn check_present<T>(
        &mut self,
        value: Option<&Value>,
        rule: impl FnOnce(&Value) -> Result<T, FieldError>,
    ) -> Option<T> {
        value.and_then(|value| self.check(rule(value)))
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationErrors {
                errors_messages: self.errors,
            }),
        }
    }
}

/// Validate a create request: title, author and resolutions.
pub fn validate_create(input: &CreateVideoInput) -> Result<NewVideo, ValidationErrors> {
    let mut collector = Collector::default();
    let title = collector.check(rules::validate_title(input.title.as_ref()));
    let author = collector.check(rules::validate_author(input.author.as_ref()));
    let resolutions =
        collector.check(rules::validate_resolutions(input.available_resolutions.as_ref()));

    let new = match (title, author, resolutions) {
        (Some(title), Some(author), Some(available_resolutions)) => Some(NewVideo {
            title,
            author,
            available_resolutions,
        }),
        _ => None,
    };
    collector.finish(new)
}

/// Validate a replace request.
///
/// Title and author are required. The other fields are only checked when
/// sent; `availableResolutions` is only applied when it is an array.
pub fn validate_update(input: &UpdateVideoInput) -> Result<VideoPatch, ValidationErrors> {
    let mut collector = Collector::default();
    let title = collector.check(rules::validate_title(input.title.as_ref()));
    let author = collector.check(rules::validate_author(input.author.as_ref()));
    let available_resolutions = match &input.available_resolutions {
        Some(value @ Value::Array(_)) => collector.check(rules::validate_resolutions(Some(value))),
        _ => None,
    };
    let can_be_downloaded = collector
        .check_present(
            input.can_be_downloaded.as_ref(),
            rules::validate_can_be_downloaded,
        )
        .flatten();
    let min_age_restriction = collector.check_present(
        input.min_age_restriction.as_ref(),
        rules::validate_min_age_restriction,
    );
    let publication_date = collector
        .check_present(
            input.publication_date.as_ref(),
            rules::validate_publication_date,
        )
        .flatten();

    let patch = match (title, author) {
        (Some(title), Some(author)) => Some(VideoPatch {
            title,
            author,
            available_resolutions,
            can_be_downloaded,
            min_age_restriction,
            publication_date,
        }),
        _ => None,
    };
    collector.finish(patch)
}
