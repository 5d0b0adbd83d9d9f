use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::domain::new_subscriber::{NewSubscriberBody, UnsubscribeBody};
use crate::domain::validation::{deserialize_fields, validate_insert};
use crate::routes::ApiResponse;
use crate::services::subscriptions::{subscribe, unsubscribe};
use crate::services::ServiceError;

#[tracing::instrument(
    name = "Newsletter subscribe handler",
    skip(body, db_pool),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn handle_subscribe(
    body: web::Json<serde_json::Value>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let new_subscriber = validate_insert::<NewSubscriberBody>(body.into_inner())?;

    tracing::Span::current().record(
        "subscriber_email",
        &tracing::field::display(&new_subscriber.email),
    );

    let outcome = subscribe(&db_pool, &new_subscriber).await?;

    if outcome.created {
        Ok(HttpResponse::Created().json(ApiResponse::success(
            "Thank you for subscribing to our newsletter.",
        )))
    } else {
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            "Your newsletter subscription has been updated.",
        )))
    }
}

/// Answers the same way whether or not the address was subscribed.
#[tracing::instrument(name = "Newsletter unsubscribe handler", skip(body, db_pool))]
pub async fn handle_unsubscribe(
    body: web::Json<serde_json::Value>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let email = deserialize_fields::<UnsubscribeBody>(&body)?.parse()?;

    unsubscribe(&db_pool, &email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "You have been unsubscribed from our newsletter.",
    )))
}
