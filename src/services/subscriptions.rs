use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::domain::{
    new_subscriber::NewSubscriber, subscriber::Subscriber, subscriber_email::SubscriberEmail,
    subscriber_name::SubscriberName, subscriber_preferences::SubscriberPreferences,
    subscriber_status::SubscriberStatus,
};
use crate::services::{decode_error, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscribeOutcome {
    pub created: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsubscribeOutcome {
    pub found: bool,
}

/// Creates, reactivates or refreshes the one subscriber record for this email.
///
/// Lookup and write run in a single transaction holding a row lock. Two first-time
/// subscribes for the same address can still race on the insert; the loser hits the
/// unique index, gets `Conflict`, and the whole sequence is replayed once.
#[tracing::instrument(
    name = "Subscribing to the newsletter",
    skip(db_pool, new_subscriber),
    fields(
        subscriber_email = %new_subscriber.email,
        preferences = ?new_subscriber.preferences.to_tags()
    )
)]
pub async fn subscribe(
    db_pool: &PgPool,
    new_subscriber: &NewSubscriber,
) -> Result<SubscribeOutcome, ServiceError> {
    match try_subscribe(db_pool, new_subscriber).await {
        Err(ServiceError::Conflict(reason)) => {
            tracing::warn!("Concurrent subscribe for the same email, retrying: {}", reason);
            try_subscribe(db_pool, new_subscriber).await
        }
        outcome => outcome,
    }
}

async fn try_subscribe(
    db_pool: &PgPool,
    new_subscriber: &NewSubscriber,
) -> Result<SubscribeOutcome, ServiceError> {
    let mut transaction = db_pool.begin().await?;

    let created = match find_subscriber_for_update(&mut transaction, &new_subscriber.email).await? {
        None => {
            insert_subscriber(&mut transaction, new_subscriber).await?;
            true
        }
        Some(existing) => {
            update_subscriber(&mut transaction, &existing, new_subscriber).await?;
            false
        }
    };

    transaction.commit().await?;

    Ok(SubscribeOutcome { created })
}

/// Marks the subscriber as unsubscribed. Unknown addresses are not an error.
#[tracing::instrument(name = "Unsubscribing from the newsletter", skip(db_pool))]
pub async fn unsubscribe(
    db_pool: &PgPool,
    email: &SubscriberEmail,
) -> Result<UnsubscribeOutcome, ServiceError> {
    let mut transaction = db_pool.begin().await?;

    let found = match find_subscriber_for_update(&mut transaction, email).await? {
        None => false,
        Some(existing) if existing.status.is_unsubscribed() => true,
        Some(existing) => {
            mark_unsubscribed(&mut transaction, &existing.id).await?;
            true
        }
    };

    transaction.commit().await?;

    if !found {
        tracing::info!("Unsubscribe requested for an unknown email");
    }

    Ok(UnsubscribeOutcome { found })
}

#[tracing::instrument(name = "Fetching a subscriber by email", skip(db_pool))]
pub async fn find_subscriber_by_email(
    db_pool: &PgPool,
    email: &SubscriberEmail,
) -> Result<Option<Subscriber>, ServiceError> {
    let subscriber = sqlx::query(
        r#"
        SELECT id, email, first_name, last_name, status, preferences, subscribed_at, unsubscribed_at
        FROM newsletter_subscribers
        WHERE email = $1
        "#,
    )
    .bind(email.as_ref())
    .try_map(subscriber_from_row)
    .fetch_optional(db_pool)
    .await?;

    Ok(subscriber)
}

async fn find_subscriber_for_update(
    transaction: &mut Transaction<'_, Postgres>,
    email: &SubscriberEmail,
) -> Result<Option<Subscriber>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT id, email, first_name, last_name, status, preferences, subscribed_at, unsubscribed_at
        FROM newsletter_subscribers
        WHERE email = $1
        FOR UPDATE
        "#,
    )
    .bind(email.as_ref())
    .try_map(subscriber_from_row)
    .fetch_optional(&mut *transaction)
    .await
}

#[tracing::instrument(
    name = "Insert a new subscriber into the database",
    skip(transaction, new_subscriber)
)]
async fn insert_subscriber(
    transaction: &mut Transaction<'_, Postgres>,
    new_subscriber: &NewSubscriber,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO newsletter_subscribers (id, email, first_name, last_name, status, preferences, subscribed_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_subscriber.email.as_ref())
    .bind(new_subscriber.first_name.as_ref().map(|name| name.as_ref()))
    .bind(new_subscriber.last_name.as_ref().map(|name| name.as_ref()))
    .bind(SubscriberStatus::Active.as_ref())
    .bind(new_subscriber.preferences.to_tags())
    .bind(Utc::now())
    .execute(&mut *transaction)
    .await?;

    Ok(())
}

/// Names missing from the request keep their stored values.
#[tracing::instrument(
    name = "Update an existing subscriber",
    skip(transaction, existing, new_subscriber),
    fields(subscriber_id = %existing.id, previous_status = existing.status.as_ref())
)]
async fn update_subscriber(
    transaction: &mut Transaction<'_, Postgres>,
    existing: &Subscriber,
    new_subscriber: &NewSubscriber,
) -> Result<(), sqlx::Error> {
    let status = existing.status.on_resubscribe();

    sqlx::query(
        r#"
        UPDATE newsletter_subscribers
        SET first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            preferences = $4,
            status = $5,
            unsubscribed_at = NULL
        WHERE id = $1
        "#,
    )
    .bind(existing.id)
    .bind(new_subscriber.first_name.as_ref().map(|name| name.as_ref()))
    .bind(new_subscriber.last_name.as_ref().map(|name| name.as_ref()))
    .bind(new_subscriber.preferences.to_tags())
    .bind(status.as_ref())
    .execute(&mut *transaction)
    .await?;

    Ok(())
}

#[tracing::instrument(name = "Mark a subscriber as unsubscribed", skip(transaction))]
async fn mark_unsubscribed(
    transaction: &mut Transaction<'_, Postgres>,
    subscriber_id: &Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE newsletter_subscribers
        SET status = $2, unsubscribed_at = $3
        WHERE id = $1
        "#,
    )
    .bind(subscriber_id)
    .bind(SubscriberStatus::Unsubscribed.as_ref())
    .bind(Utc::now())
    .execute(&mut *transaction)
    .await?;

    Ok(())
}

fn subscriber_from_row(row: PgRow) -> Result<Subscriber, sqlx::Error> {
    let first_name: Option<String> = row.try_get("first_name")?;
    let last_name: Option<String> = row.try_get("last_name")?;

    Ok(Subscriber {
        id: row.try_get("id")?,
        email: SubscriberEmail::parse(row.try_get("email")?).map_err(decode_error)?,
        first_name: first_name
            .map(SubscriberName::parse)
            .transpose()
            .map_err(decode_error)?,
        last_name: last_name
            .map(SubscriberName::parse)
            .transpose()
            .map_err(decode_error)?,
        status: SubscriberStatus::parse(row.try_get("status")?).map_err(decode_error)?,
        preferences: SubscriberPreferences::from_tags(row.try_get("preferences")?)
            .map_err(decode_error)?,
        subscribed_at: row.try_get("subscribed_at")?,
        unsubscribed_at: row.try_get("unsubscribed_at")?,
    })
}
