//! Raw request bodies for create and replace.
//!
//! Fields are kept as untyped JSON so that a wrong shape (a number where a
//! string belongs, a missing key, a body that is not JSON at all) surfaces as
//! a field-level validation error instead of a decode failure.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::resolution::Resolution;
use super::timestamp;

/// Body of a create request: `{ title, author, availableResolutions }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoInput {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub author: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub available_resolutions: Option<Value>,
}

/// Body of a replace request.
///
/// `None` means the key was absent; `Some(Value::Null)` means it was sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoInput {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub author: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub available_resolutions: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub can_be_downloaded: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub min_age_restriction: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub publication_date: Option<Value>,
}

/// Keep an explicit `null` as `Some(Value::Null)` instead of collapsing it to `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn resolutions_value(resolutions: &[Resolution]) -> Value {
    Value::Array(
        resolutions
            .iter()
            .map(|resolution| Value::String(resolution.as_str().to_string()))
            .collect(),
    )
}

/// Decode a JSON object into an input, treating anything else as an empty body.
fn from_object<T: Default + DeserializeOwned>(value: Value) -> T {
    if value.is_object() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        T::default()
    }
}

impl CreateVideoInput {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        resolutions: &[Resolution],
    ) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            author: Some(Value::String(author.into())),
            available_resolutions: Some(resolutions_value(resolutions)),
        }
    }

    pub fn from_json(value: Value) -> Self {
        from_object(value)
    }

    /// Decode a raw request body. Bytes that are not JSON yield an empty input.
    pub fn from_slice(body: &[u8]) -> Self {
        Self::from_json(serde_json::from_slice(body).unwrap_or_default())
    }
}

impl UpdateVideoInput {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            author: Some(Value::String(author.into())),
            ..Self::default()
        }
    }

    pub fn resolutions(mut self, resolutions: &[Resolution]) -> Self {
        self.available_resolutions = Some(resolutions_value(resolutions));
        self
    }

    pub fn can_be_downloaded(mut self, can_be_downloaded: bool) -> Self {
        self.can_be_downloaded = Some(Value::Bool(can_be_downloaded));
        self
    }

    pub fn min_age_restriction(mut self, min_age_restriction: Option<u8>) -> Self {
        self.min_age_restriction =
            Some(min_age_restriction.map(Value::from).unwrap_or(Value::Null));
        self
    }

    pub fn publication_date(mut self, publication_date: DateTime<Utc>) -> Self {
        self.publication_date = Some(Value::String(timestamp::render(&publication_date)));
        self
    }

    pub fn from_json(value: Value) -> Self {
        from_object(value)
    }

    /// Decode a raw request body. Bytes that are not JSON yield an empty input.
    pub fn from_slice(body: &[u8]) -> Self {
        Self::from_json(serde_json::from_slice(body).unwrap_or_default())
    }
}
