//! Per-field checks. Each rule either yields the typed value or a single
//! [`FieldError`] for its field.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{field, FieldError};
use crate::video::{timestamp, Resolution};

pub const TITLE_MAX_LEN: usize = 40;
pub const AUTHOR_MAX_LEN: usize = 20;
pub const MIN_AGE_RESTRICTION: RangeInclusive<u64> = 1..=18;

/// A string whose trimmed length is between 1 and `max` characters.
fn bounded_text(
    value: Option<&Value>,
    name: &'static str,
    max: usize,
) -> Result<String, FieldError> {
    let text = value
        .and_then(Value::as_str)
        .ok_or_else(|| FieldError::invalid(name))?;
    let len = text.trim().chars().count();
    if len == 0 || len > max {
        return Err(FieldError::invalid(name));
    }
    Ok(text.to_string())
}

pub fn validate_title(value: Option<&Value>) -> Result<String, FieldError> {
    bounded_text(value, field::TITLE, TITLE_MAX_LEN)
}

pub fn validate_author(value: Option<&Value>) -> Result<String, FieldError> {
    bounded_text(value, field::AUTHOR, AUTHOR_MAX_LEN)
}

/// Anything other than an array normalizes to no resolutions. An array with
/// one or more unknown tags is a single error for the whole field.
/// Repeated tags are kept once, in first-seen order.
pub fn validate_resolutions(value: Option<&Value>) -> Result<Vec<Resolution>, FieldError> {
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    let mut resolutions = Vec::with_capacity(items.len());
    for item in items {
        let resolution = item
            .as_str()
            .and_then(|tag| tag.parse::<Resolution>().ok())
            .ok_or_else(|| FieldError::invalid(field::AVAILABLE_RESOLUTIONS))?;
        if !resolutions.contains(&resolution) {
            resolutions.push(resolution);
        }
    }
    Ok(resolutions)
}

/// `null` leaves the flag alone.
pub fn validate_can_be_downloaded(value: &Value) -> Result<Option<bool>, FieldError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(flag) => Ok(Some(*flag)),
        _ => Err(FieldError::invalid(field::CAN_BE_DOWNLOADED)),
    }
}

/// `null` removes the restriction; otherwise an age in [`MIN_AGE_RESTRICTION`].
pub fn validate_min_age_restriction(value: &Value) -> Result<Option<u8>, FieldError> {
    if value.is_null() {
        return Ok(None);
    }
    value
        .as_u64()
        .filter(|age| MIN_AGE_RESTRICTION.contains(age))
        .and_then(|age| u8::try_from(age).ok())
        .map(Some)
        .ok_or_else(|| FieldError::invalid(field::MIN_AGE_RESTRICTION))
}

/// `null` leaves the date alone; otherwise an RFC 3339 timestamp.
pub fn validate_publication_date(value: &Value) -> Result<Option<DateTime<Utc>>, FieldError> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) => timestamp::parse(raw)
            .map(Some)
            .ok_or_else(|| FieldError::invalid(field::PUBLICATION_DATE)),
        _ => Err(FieldError::invalid(field::PUBLICATION_DATE)),
    }
}
