use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::domain::validation::validate_insert;
use crate::domain::volunteer::NewVolunteerBody;
use crate::routes::ApiResponse;
use crate::services::volunteers::insert_volunteer;
use crate::services::ServiceError;

#[tracing::instrument(name = "Volunteer registration handler", skip(body, db_pool))]
pub async fn handle_register_volunteer(
    body: web::Json<serde_json::Value>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ServiceError> {
    let new_volunteer = validate_insert::<NewVolunteerBody>(body.into_inner())?;

    insert_volunteer(&db_pool, &new_volunteer).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Welcome aboard! Your volunteer registration was received.",
    )))
}
