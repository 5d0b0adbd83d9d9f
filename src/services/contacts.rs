use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::contact::NewContact;
use crate::services::ServiceError;

#[tracing::instrument(
    name = "Storing a contact message",
    skip(db_pool, new_contact),
    fields(contact_email = %new_contact.email, subject = %new_contact.subject)
)]
pub async fn insert_contact(
    db_pool: &PgPool,
    new_contact: &NewContact,
) -> Result<Uuid, ServiceError> {
    let contact_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO contacts (id, first_name, last_name, email, subject, message, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(contact_id)
    .bind(new_contact.first_name.as_ref())
    .bind(new_contact.last_name.as_ref())
    .bind(new_contact.email.as_ref())
    .bind(&new_contact.subject)
    .bind(&new_contact.message)
    .bind(Utc::now())
    .execute(db_pool)
    .await?;

    Ok(contact_id)
}
