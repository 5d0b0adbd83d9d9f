use serde::Deserialize;
use uuid::Uuid;

use crate::domain::validation::{
    optional_text, required_body, required_text, EntityKind, FieldErrors, InsertPayload,
    ValidationError,
};

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub description: String,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub email_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub name: String,
    pub position: String,
    pub description: String,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub email_url: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMemberBody {
    pub name: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub email_url: Option<String>,
}

impl InsertPayload for NewTeamMemberBody {
    const KIND: EntityKind = EntityKind::TeamMember;
    type Validated = NewTeamMember;

    fn validate(self) -> Result<NewTeamMember, ValidationError> {
        let mut errors = FieldErrors::default();
        let name = errors.check("name", required_text(self.name));
        let position = errors.check("position", required_text(self.position));
        let description = errors.check("description", required_body(self.description));

        let (Some(name), Some(position), Some(description)) = (name, position, description) else {
            return Err(errors.into_error());
        };

        Ok(NewTeamMember {
            name,
            position,
            description,
            image_url: optional_text(self.image_url),
            linkedin_url: optional_text(self.linkedin_url),
            email_url: optional_text(self.email_url),
        })
    }
}
