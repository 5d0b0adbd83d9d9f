use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::newsletter::{NewNewsletter, Newsletter};
use crate::domain::newsletter_category::NewsletterCategory;
use crate::services::{decode_error, ServiceError};

/// Published newsletters, most recent first.
///
/// Recency is `published_at`, or `created_at` when a record was published without one;
/// equal dates fall back to ascending id so the order never changes between calls.
#[tracing::instrument(name = "Listing published newsletters", skip(db_pool))]
pub async fn list_newsletters(
    db_pool: &PgPool,
    category: Option<&str>,
) -> Result<Vec<Newsletter>, ServiceError> {
    let newsletters = sqlx::query(
        r#"
        SELECT id, title, description, content, category, featured_image, is_published,
               published_at, created_at, updated_at
        FROM newsletters
        WHERE is_published = TRUE
          AND ($1::TEXT IS NULL OR category = $1)
        ORDER BY COALESCE(published_at, created_at) DESC, id ASC
        "#,
    )
    .bind(category)
    .try_map(newsletter_from_row)
    .fetch_all(db_pool)
    .await?;

    Ok(newsletters)
}

#[tracing::instrument(name = "Fetching a published newsletter", skip(db_pool))]
pub async fn get_published_newsletter(
    db_pool: &PgPool,
    newsletter_id: Uuid,
) -> Result<Newsletter, ServiceError> {
    sqlx::query(
        r#"
        SELECT id, title, description, content, category, featured_image, is_published,
               published_at, created_at, updated_at
        FROM newsletters
        WHERE id = $1 AND is_published = TRUE
        "#,
    )
    .bind(newsletter_id)
    .try_map(newsletter_from_row)
    .fetch_optional(db_pool)
    .await?
    .ok_or_else(|| ServiceError::NotFound(format!("Newsletter {}", newsletter_id)))
}

#[tracing::instrument(
    name = "Insert a new newsletter into the database",
    skip(db_pool, new_newsletter),
    fields(
        title = %new_newsletter.title,
        category = new_newsletter.category.as_ref(),
        is_published = new_newsletter.is_published
    )
)]
pub async fn insert_newsletter(
    db_pool: &PgPool,
    new_newsletter: &NewNewsletter,
) -> Result<Newsletter, ServiceError> {
    let now = Utc::now();

    let newsletter = sqlx::query(
        r#"
        INSERT INTO newsletters (id, title, description, content, category, featured_image,
                                 is_published, published_at, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        RETURNING id, title, description, content, category, featured_image, is_published,
                  published_at, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_newsletter.title)
    .bind(&new_newsletter.description)
    .bind(&new_newsletter.content)
    .bind(new_newsletter.category.as_ref())
    .bind(new_newsletter.featured_image.as_deref())
    .bind(new_newsletter.is_published)
    .bind(new_newsletter.publication_date(now))
    .bind(now)
    .try_map(newsletter_from_row)
    .fetch_one(db_pool)
    .await?;

    Ok(newsletter)
}

/// Makes a draft visible. An existing publication date is kept.
#[tracing::instrument(name = "Publishing a newsletter", skip(db_pool))]
pub async fn publish_newsletter(
    db_pool: &PgPool,
    newsletter_id: Uuid,
) -> Result<Newsletter, ServiceError> {
    sqlx::query(
        r#"
        UPDATE newsletters
        SET is_published = TRUE,
            published_at = COALESCE(published_at, $2),
            updated_at = $2
        WHERE id = $1
        RETURNING id, title, description, content, category, featured_image, is_published,
                  published_at, created_at, updated_at
        "#,
    )
    .bind(newsletter_id)
    .bind(Utc::now())
    .try_map(newsletter_from_row)
    .fetch_optional(db_pool)
    .await?
    .ok_or_else(|| ServiceError::NotFound(format!("Newsletter {}", newsletter_id)))
}

fn newsletter_from_row(row: PgRow) -> Result<Newsletter, sqlx::Error> {
    let category: String = row.try_get("category")?;

    Ok(Newsletter {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        content: row.try_get("content")?,
        category: NewsletterCategory::parse(&category).map_err(decode_error)?,
        featured_image: row.try_get("featured_image")?,
        is_published: row.try_get("is_published")?,
        published_at: row.try_get("published_at")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
