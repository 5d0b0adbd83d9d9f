use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::subscriber_email::SubscriberEmail;

/// The record kinds that accept writes from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    NewsletterSubscriber,
    Contact,
    Event,
    TeamMember,
    MediaItem,
    Volunteer,
    Newsletter,
    Professor,
    User,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::NewsletterSubscriber => "newsletter subscriber",
            EntityKind::Contact => "contact",
            EntityKind::Event => "event",
            EntityKind::TeamMember => "team member",
            EntityKind::MediaItem => "media item",
            EntityKind::Volunteer => "volunteer",
            EntityKind::Newsletter => "newsletter",
            EntityKind::Professor => "professor",
            EntityKind::User => "user",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

/// Every field that failed validation, in the order they were checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(field: &str, reason: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.to_string(),
                reason: reason.into(),
            }],
        }
    }

    pub fn cites(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

/// Collects field failures so a payload reports all of its problems at once.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(reason) => {
                self.0.push(FieldError {
                    field: field.to_string(),
                    reason,
                });
                None
            }
        }
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError { errors: self.0 }
    }
}

/// A whitelist of the fields an entity accepts on insert.
///
/// Implementors only declare the externally settable fields, so anything else in the raw
/// input (ids, statuses, server timestamps) is dropped during deserialization.
pub trait InsertPayload: DeserializeOwned {
    const KIND: EntityKind;
    type Validated;

    fn validate(self) -> Result<Self::Validated, ValidationError>;
}

#[tracing::instrument(name = "Validating insert payload", skip(raw), fields(entity = P::KIND.as_str()))]
pub fn validate_insert<P: InsertPayload>(
    raw: serde_json::Value,
) -> Result<P::Validated, ValidationError> {
    deserialize_fields::<P>(&raw)?.validate()
}

/// Deserializes a JSON object body, citing each field whose value has the wrong shape.
///
/// Every field of `T` must be optional: each key is then retried on its own to find
/// the ones that break deserialization.
pub fn deserialize_fields<T: DeserializeOwned>(raw: &Value) -> Result<T, ValidationError> {
    let Some(fields) = raw.as_object() else {
        return Err(ValidationError::single("body", "expected a JSON object"));
    };

    T::deserialize(raw).map_err(|err| {
        let errors = mistyped_fields::<T>(fields);

        if errors.is_empty() {
            ValidationError::single("body", err.to_string())
        } else {
            ValidationError { errors }
        }
    })
}

fn mistyped_fields<T: DeserializeOwned>(fields: &Map<String, Value>) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|(name, value)| {
            let single = Value::Object(Map::from_iter([(name.clone(), value.clone())]));

            T::deserialize(&single).err().map(|err| FieldError {
                field: name.clone(),
                reason: err.to_string(),
            })
        })
        .collect()
}

pub fn required_text(value: Option<String>) -> Result<String, String> {
    match value {
        None => Err(String::from("is required")),
        Some(text) if text.trim().is_empty() => Err(String::from("cannot be empty")),
        Some(text) => Ok(text.trim().to_string()),
    }
}

/// Like [`required_text`] but keeps the value untouched, for multi-line bodies.
pub fn required_body(value: Option<String>) -> Result<String, String> {
    match value {
        None => Err(String::from("is required")),
        Some(text) if text.trim().is_empty() => Err(String::from("cannot be empty")),
        Some(text) => Ok(text),
    }
}

/// Blank strings count as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub fn required_email(value: Option<String>) -> Result<SubscriberEmail, String> {
    match value {
        None => Err(String::from("is required")),
        Some(email) => SubscriberEmail::parse(email),
    }
}

pub fn required_timestamp(value: Option<String>) -> Result<DateTime<Utc>, String> {
    optional_timestamp(value)?.ok_or_else(|| String::from("is required"))
}

pub fn optional_timestamp(value: Option<String>) -> Result<Option<DateTime<Utc>>, String> {
    match optional_text(value) {
        None => Ok(None),
        Some(text) => DateTime::parse_from_rfc3339(&text)
            .map(|timestamp| Some(timestamp.with_timezone(&Utc)))
            .map_err(|_| format!("{} is not an RFC 3339 timestamp", text)),
    }
}

/// Trims tags, drops blanks and repeats while keeping the first-seen order.
pub fn tag_list(value: Option<Vec<String>>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for tag in value.unwrap_or_default() {
        let tag = tag.trim();

        if !tag.is_empty() && !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }

    tags
}
