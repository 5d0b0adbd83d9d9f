use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::volunteer::NewVolunteer;
use crate::services::ServiceError;

#[tracing::instrument(
    name = "Registering a volunteer",
    skip(db_pool, new_volunteer),
    fields(volunteer_email = %new_volunteer.email)
)]
pub async fn insert_volunteer(
    db_pool: &PgPool,
    new_volunteer: &NewVolunteer,
) -> Result<Uuid, ServiceError> {
    let volunteer_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO volunteers (id, first_name, last_name, email, phone, student_id, department,
                                year, interests, skills, availability, experience, is_active,
                                joined_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, TRUE, $13)
        "#,
    )
    .bind(volunteer_id)
    .bind(new_volunteer.first_name.as_ref())
    .bind(new_volunteer.last_name.as_ref())
    .bind(new_volunteer.email.as_ref())
    .bind(new_volunteer.phone.as_deref())
    .bind(new_volunteer.student_id.as_deref())
    .bind(new_volunteer.department.as_deref())
    .bind(new_volunteer.year.as_deref())
    .bind(&new_volunteer.interests)
    .bind(&new_volunteer.skills)
    .bind(new_volunteer.availability.as_deref())
    .bind(new_volunteer.experience.as_deref())
    .bind(Utc::now())
    .execute(db_pool)
    .await
    .map_err(|err| match ServiceError::from(err) {
        ServiceError::Conflict(_) => ServiceError::Conflict(String::from(
            "A volunteer with this email is already registered.",
        )),
        other => other,
    })?;

    Ok(volunteer_id)
}
