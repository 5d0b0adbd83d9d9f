use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::validation::{
    optional_text, required_text, tag_list, EntityKind, FieldErrors, InsertPayload,
    ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn parse(media_type: &str) -> Result<MediaType, String> {
        match media_type {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            _ => Err(format!("{} is not a media type", media_type)),
        }
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub media_type: MediaType,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub uploaded_by: String,
    pub is_published: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMediaItem {
    pub title: String,
    pub description: Option<String>,
    pub media_type: MediaType,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub uploaded_by: String,
    pub is_published: bool,
    pub sort_order: i32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewMediaItemBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub uploaded_by: Option<String>,
    pub is_published: Option<bool>,
    pub sort_order: Option<i32>,
}

impl InsertPayload for NewMediaItemBody {
    const KIND: EntityKind = EntityKind::MediaItem;
    type Validated = NewMediaItem;

    fn validate(self) -> Result<NewMediaItem, ValidationError> {
        let mut errors = FieldErrors::default();
        let title = errors.check("title", required_text(self.title));
        let media_type = errors.check(
            "mediaType",
            required_text(self.media_type).and_then(|media_type| MediaType::parse(&media_type)),
        );
        let media_url = errors.check("mediaUrl", required_text(self.media_url));
        let category = errors.check("category", required_text(self.category));
        let uploaded_by = errors.check("uploadedBy", required_text(self.uploaded_by));

        let (Some(title), Some(media_type), Some(media_url), Some(category), Some(uploaded_by)) =
            (title, media_type, media_url, category, uploaded_by)
        else {
            return Err(errors.into_error());
        };

        Ok(NewMediaItem {
            title,
            description: optional_text(self.description),
            media_type,
            media_url,
            thumbnail_url: optional_text(self.thumbnail_url),
            category,
            tags: tag_list(self.tags),
            uploaded_by,
            is_published: self.is_published.unwrap_or(false),
            sort_order: self.sort_order.unwrap_or(0),
        })
    }
}
