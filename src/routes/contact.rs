use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::domain::contact::NewContactBody;
use crate::domain::validation::validate_insert;
use crate::routes::ApiResponse;
use crate::services::contacts::insert_contact;
use crate::services::ServiceError;

#[tracing::instrument(name = "Contact form handler", skip(body, db_pool))]
pub async fn handle_contact(
    body: web::Json<serde_json::Value>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let new_contact = validate_insert::<NewContactBody>(body.into_inner())?;

    insert_contact(&db_pool, &new_contact).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Thanks for reaching out. We will get back to you soon.",
    )))
}
