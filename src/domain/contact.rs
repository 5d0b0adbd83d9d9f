use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::validation::{
    required_body, required_email, required_text, EntityKind, FieldErrors, InsertPayload,
    ValidationError,
};

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub first_name: SubscriberName,
    pub last_name: SubscriberName,
    pub email: SubscriberEmail,
    pub subject: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewContactBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl InsertPayload for NewContactBody {
    const KIND: EntityKind = EntityKind::Contact;
    type Validated = NewContact;

    fn validate(self) -> Result<NewContact, ValidationError> {
        let mut errors = FieldErrors::default();
        let first_name = errors.check("firstName", SubscriberName::parse_required(self.first_name));
        let last_name = errors.check("lastName", SubscriberName::parse_required(self.last_name));
        let email = errors.check("email", required_email(self.email));
        let subject = errors.check("subject", required_text(self.subject));
        let message = errors.check("message", required_body(self.message));

        let (Some(first_name), Some(last_name), Some(email), Some(subject), Some(message)) =
            (first_name, last_name, email, subject, message)
        else {
            return Err(errors.into_error());
        };

        Ok(NewContact {
            first_name,
            last_name,
            email,
            subject,
            message,
        })
    }
}
