//! Public listings for the rest of the site content, plus the writes used to seed it.

use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::event::{Event, NewEvent};
use crate::domain::media_item::{MediaItem, MediaType, NewMediaItem};
use crate::domain::professor::{NewProfessor, Professor, ProfessorRole};
use crate::domain::team_member::{NewTeamMember, TeamMember};
use crate::services::{decode_error, ServiceError};

#[tracing::instrument(name = "Listing active team members", skip(db_pool))]
pub async fn list_active_team_members(db_pool: &PgPool) -> Result<Vec<TeamMember>, ServiceError> {
    let members = sqlx::query(
        r#"
        SELECT id, name, position, description, image_url, linkedin_url, email_url, is_active
        FROM team_members
        WHERE is_active = TRUE
        ORDER BY name ASC, id ASC
        "#,
    )
    .try_map(team_member_from_row)
    .fetch_all(db_pool)
    .await?;

    Ok(members)
}

#[tracing::instrument(name = "Listing active professors", skip(db_pool))]
pub async fn list_active_professors(
    db_pool: &PgPool,
    role: Option<&str>,
) -> Result<Vec<Professor>, ServiceError> {
    let professors = sqlx::query(
        r#"
        SELECT id, name, role, department, email, is_active
        FROM professors
        WHERE is_active = TRUE
          AND ($1::TEXT IS NULL OR role = $1)
        ORDER BY role ASC, name ASC, id ASC
        "#,
    )
    .bind(role)
    .try_map(professor_from_row)
    .fetch_all(db_pool)
    .await?;

    Ok(professors)
}

/// Active events in calendar order.
#[tracing::instrument(name = "Listing active events", skip(db_pool))]
pub async fn list_active_events(
    db_pool: &PgPool,
    category: Option<&str>,
) -> Result<Vec<Event>, ServiceError> {
    let events = sqlx::query(
        r#"
        SELECT id, title, description, content, date, location, image_url, category,
               is_active, created_at
        FROM events
        WHERE is_active = TRUE
          AND ($1::TEXT IS NULL OR category = $1)
        ORDER BY date ASC, id ASC
        "#,
    )
    .bind(category)
    .try_map(event_from_row)
    .fetch_all(db_pool)
    .await?;

    Ok(events)
}

#[tracing::instrument(name = "Listing published media", skip(db_pool))]
pub async fn list_published_media(
    db_pool: &PgPool,
    category: Option<&str>,
) -> Result<Vec<MediaItem>, ServiceError> {
    let items = sqlx::query(
        r#"
        SELECT id, title, description, media_type, media_url, thumbnail_url, category, tags,
               uploaded_by, is_published, sort_order, created_at, updated_at
        FROM media_items
        WHERE is_published = TRUE
          AND ($1::TEXT IS NULL OR category = $1)
        ORDER BY sort_order ASC, created_at DESC, id ASC
        "#,
    )
    .bind(category)
    .try_map(media_item_from_row)
    .fetch_all(db_pool)
    .await?;

    Ok(items)
}

#[tracing::instrument(name = "Insert a new event", skip(db_pool, new_event), fields(title = %new_event.title))]
pub async fn insert_event(db_pool: &PgPool, new_event: &NewEvent) -> Result<Event, ServiceError> {
    let event = sqlx::query(
        r#"
        INSERT INTO events (id, title, description, content, date, location, image_url, category,
                            is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE, $9)
        RETURNING id, title, description, content, date, location, image_url, category,
                  is_active, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_event.title)
    .bind(&new_event.description)
    .bind(new_event.content.as_deref())
    .bind(new_event.date)
    .bind(&new_event.location)
    .bind(new_event.image_url.as_deref())
    .bind(&new_event.category)
    .bind(Utc::now())
    .try_map(event_from_row)
    .fetch_one(db_pool)
    .await?;

    Ok(event)
}

#[tracing::instrument(name = "Insert a new team member", skip(db_pool, new_member), fields(name = %new_member.name))]
pub async fn insert_team_member(
    db_pool: &PgPool,
    new_member: &NewTeamMember,
) -> Result<TeamMember, ServiceError> {
    let member = sqlx::query(
        r#"
        INSERT INTO team_members (id, name, position, description, image_url, linkedin_url,
                                  email_url, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
        RETURNING id, name, position, description, image_url, linkedin_url, email_url, is_active
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_member.name)
    .bind(&new_member.position)
    .bind(&new_member.description)
    .bind(new_member.image_url.as_deref())
    .bind(new_member.linkedin_url.as_deref())
    .bind(new_member.email_url.as_deref())
    .try_map(team_member_from_row)
    .fetch_one(db_pool)
    .await?;

    Ok(member)
}

#[tracing::instrument(name = "Insert a new professor", skip(db_pool, new_professor), fields(name = %new_professor.name))]
pub async fn insert_professor(
    db_pool: &PgPool,
    new_professor: &NewProfessor,
) -> Result<Professor, ServiceError> {
    let professor = sqlx::query(
        r#"
        INSERT INTO professors (id, name, role, department, email, is_active)
        VALUES ($1, $2, $3, $4, $5, TRUE)
        RETURNING id, name, role, department, email, is_active
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_professor.name)
    .bind(new_professor.role.as_ref())
    .bind(new_professor.department.as_deref())
    .bind(new_professor.email.as_ref().map(|email| email.as_ref()))
    .try_map(professor_from_row)
    .fetch_one(db_pool)
    .await?;

    Ok(professor)
}

#[tracing::instrument(name = "Insert a new media item", skip(db_pool, new_item), fields(title = %new_item.title))]
pub async fn insert_media_item(
    db_pool: &PgPool,
    new_item: &NewMediaItem,
) -> Result<MediaItem, ServiceError> {
    let now = Utc::now();

    let item = sqlx::query(
        r#"
        INSERT INTO media_items (id, title, description, media_type, media_url, thumbnail_url,
                                 category, tags, uploaded_by, is_published, sort_order,
                                 created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
        RETURNING id, title, description, media_type, media_url, thumbnail_url, category, tags,
                  uploaded_by, is_published, sort_order, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_item.title)
    .bind(new_item.description.as_deref())
    .bind(new_item.media_type.as_ref())
    .bind(&new_item.media_url)
    .bind(new_item.thumbnail_url.as_deref())
    .bind(&new_item.category)
    .bind(&new_item.tags)
    .bind(&new_item.uploaded_by)
    .bind(new_item.is_published)
    .bind(new_item.sort_order)
    .bind(now)
    .try_map(media_item_from_row)
    .fetch_one(db_pool)
    .await?;

    Ok(item)
}

pub async fn set_event_active(
    db_pool: &PgPool,
    event_id: Uuid,
    is_active: bool,
) -> Result<(), ServiceError> {
    set_active(db_pool, "events", "Event", event_id, is_active).await
}

pub async fn set_team_member_active(
    db_pool: &PgPool,
    member_id: Uuid,
    is_active: bool,
) -> Result<(), ServiceError> {
    set_active(db_pool, "team_members", "Team member", member_id, is_active).await
}

pub async fn set_professor_active(
    db_pool: &PgPool,
    professor_id: Uuid,
    is_active: bool,
) -> Result<(), ServiceError> {
    set_active(db_pool, "professors", "Professor", professor_id, is_active).await
}

#[tracing::instrument(name = "Toggling listing visibility", skip(db_pool, label))]
async fn set_active(
    db_pool: &PgPool,
    table: &'static str,
    label: &'static str,
    id: Uuid,
    is_active: bool,
) -> Result<(), ServiceError> {
    let query = format!("UPDATE {} SET is_active = $2 WHERE id = $1", table);

    let result = sqlx::query(&query)
        .bind(id)
        .bind(is_active)
        .execute(db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ServiceError::NotFound(format!("{} {}", label, id)));
    }

    Ok(())
}

fn team_member_from_row(row: PgRow) -> Result<TeamMember, sqlx::Error> {
    Ok(TeamMember {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        position: row.try_get("position")?,
        description: row.try_get("description")?,
        image_url: row.try_get("image_url")?,
        linkedin_url: row.try_get("linkedin_url")?,
        email_url: row.try_get("email_url")?,
        is_active: row.try_get("is_active")?,
    })
}

fn professor_from_row(row: PgRow) -> Result<Professor, sqlx::Error> {
    let role: String = row.try_get("role")?;

    Ok(Professor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        role: ProfessorRole::parse(&role).map_err(decode_error)?,
        department: row.try_get("department")?,
        email: row.try_get("email")?,
        is_active: row.try_get("is_active")?,
    })
}

fn event_from_row(row: PgRow) -> Result<Event, sqlx::Error> {
    Ok(Event {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        content: row.try_get("content")?,
        date: row.try_get("date")?,
        location: row.try_get("location")?,
        image_url: row.try_get("image_url")?,
        category: row.try_get("category")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get("created_at")?,
    })
}

fn media_item_from_row(row: PgRow) -> Result<MediaItem, sqlx::Error> {
    let media_type: String = row.try_get("media_type")?;

    Ok(MediaItem {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        media_type: MediaType::parse(&media_type).map_err(decode_error)?,
        media_url: row.try_get("media_url")?,
        thumbnail_url: row.try_get("thumbnail_url")?,
        category: row.try_get("category")?,
        tags: row.try_get("tags")?,
        uploaded_by: row.try_get("uploaded_by")?,
        is_published: row.try_get("is_published")?,
        sort_order: row.try_get("sort_order")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
