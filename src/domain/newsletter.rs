use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::newsletter_category::NewsletterCategory;
use crate::domain::validation::{
    optional_text, optional_timestamp, required_body, required_text, EntityKind, FieldErrors,
    InsertPayload, ValidationError,
};

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: NewsletterCategory,
    pub featured_image: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNewsletter {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: NewsletterCategory,
    pub featured_image: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl NewNewsletter {
    /// A newsletter inserted as published is stamped `now` when no date was supplied.
    pub fn publication_date(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.is_published {
            Some(self.published_at.unwrap_or(now))
        } else {
            self.published_at
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsletterBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub is_published: Option<bool>,
    pub published_at: Option<String>,
}

impl InsertPayload for NewNewsletterBody {
    const KIND: EntityKind = EntityKind::Newsletter;
    type Validated = NewNewsletter;

    fn validate(self) -> Result<NewNewsletter, ValidationError> {
        let mut errors = FieldErrors::default();
        let title = errors.check("title", required_text(self.title));
        let description = errors.check("description", required_text(self.description));
        let content = errors.check("content", required_body(self.content));
        let category = errors.check(
            "category",
            required_text(self.category).and_then(|category| NewsletterCategory::parse(&category)),
        );
        let published_at = errors.check("publishedAt", optional_timestamp(self.published_at));

        let (Some(title), Some(description), Some(content), Some(category), Some(published_at)) =
            (title, description, content, category, published_at)
        else {
            return Err(errors.into_error());
        };

        Ok(NewNewsletter {
            title,
            description,
            content,
            category,
            featured_image: optional_text(self.featured_image),
            is_published: self.is_published.unwrap_or(false),
            published_at,
        })
    }
}
