use serde::Deserialize;
use uuid::Uuid;

use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::validation::{
    optional_text, required_text, EntityKind, FieldErrors, InsertPayload, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessorRole {
    FacultyIncharge,
    ProgrammeOfficer,
}

impl ProfessorRole {
    pub fn parse(role: &str) -> Result<ProfessorRole, String> {
        match role {
            "faculty_incharge" => Ok(ProfessorRole::FacultyIncharge),
            "programme_officer" => Ok(ProfessorRole::ProgrammeOfficer),
            _ => Err(format!("{} is not a professor role", role)),
        }
    }
}

impl AsRef<str> for ProfessorRole {
    fn as_ref(&self) -> &str {
        match self {
            ProfessorRole::FacultyIncharge => "faculty_incharge",
            ProfessorRole::ProgrammeOfficer => "programme_officer",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: Uuid,
    pub name: String,
    pub role: ProfessorRole,
    pub department: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct NewProfessor {
    pub name: String,
    pub role: ProfessorRole,
    pub department: Option<String>,
    pub email: Option<SubscriberEmail>,
}

#[derive(Deserialize, Debug)]
pub struct NewProfessorBody {
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
}

impl InsertPayload for NewProfessorBody {
    const KIND: EntityKind = EntityKind::Professor;
    type Validated = NewProfessor;

    fn validate(self) -> Result<NewProfessor, ValidationError> {
        let mut errors = FieldErrors::default();
        let name = errors.check("name", required_text(self.name));
        let role = errors.check(
            "role",
            required_text(self.role).and_then(|role| ProfessorRole::parse(&role)),
        );
        let email = errors.check(
            "email",
            optional_text(self.email)
                .map(SubscriberEmail::parse)
                .transpose(),
        );

        let (Some(name), Some(role), Some(email)) = (name, role, email) else {
            return Err(errors.into_error());
        };

        Ok(NewProfessor {
            name,
            role,
            department: optional_text(self.department),
            email,
        })
    }
}
