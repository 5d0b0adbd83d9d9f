use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::validation::{
    optional_text, required_body, required_text, required_timestamp, EntityKind, FieldErrors,
    InsertPayload, ValidationError,
};

const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub image_url: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub date: DateTime<Utc>,
    pub location: String,
    pub image_url: Option<String>,
    pub category: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewEventBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl InsertPayload for NewEventBody {
    const KIND: EntityKind = EntityKind::Event;
    type Validated = NewEvent;

    fn validate(self) -> Result<NewEvent, ValidationError> {
        let mut errors = FieldErrors::default();
        let title = errors.check("title", required_text(self.title));
        let description = errors.check("description", required_body(self.description));
        let date = errors.check("date", required_timestamp(self.date));
        let location = errors.check("location", required_text(self.location));

        let (Some(title), Some(description), Some(date), Some(location)) =
            (title, description, date, location)
        else {
            return Err(errors.into_error());
        };

        Ok(NewEvent {
            title,
            description,
            content: self.content.filter(|content| !content.trim().is_empty()),
            date,
            location,
            image_url: optional_text(self.image_url),
            category: optional_text(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.into()),
        })
    }
}
