use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::validation::{
    optional_text, required_email, tag_list, EntityKind, FieldErrors, InsertPayload,
    ValidationError,
};

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub student_id: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub availability: Option<String>,
    pub experience: Option<String>,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewVolunteer {
    pub first_name: SubscriberName,
    pub last_name: SubscriberName,
    pub email: SubscriberEmail,
    pub phone: Option<String>,
    pub student_id: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub availability: Option<String>,
    pub experience: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteerBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub student_id: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub interests: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub availability: Option<String>,
    pub experience: Option<String>,
}

impl InsertPayload for NewVolunteerBody {
    const KIND: EntityKind = EntityKind::Volunteer;
    type Validated = NewVolunteer;

    fn validate(self) -> Result<NewVolunteer, ValidationError> {
        let mut errors = FieldErrors::default();
        let first_name = errors.check("firstName", SubscriberName::parse_required(self.first_name));
        let last_name = errors.check("lastName", SubscriberName::parse_required(self.last_name));
        let email = errors.check("email", required_email(self.email));

        let (Some(first_name), Some(last_name), Some(email)) = (first_name, last_name, email)
        else {
            return Err(errors.into_error());
        };

        Ok(NewVolunteer {
            first_name,
            last_name,
            email,
            phone: optional_text(self.phone),
            student_id: optional_text(self.student_id),
            department: optional_text(self.department),
            year: optional_text(self.year),
            interests: tag_list(self.interests),
            skills: tag_list(self.skills),
            availability: optional_text(self.availability),
            experience: optional_text(self.experience),
        })
    }
}
