use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::validation::{
    required_text, EntityKind, FieldErrors, InsertPayload, ValidationError,
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Validated admin credentials.
///
/// Only the validation exists: there is no user store or login route yet, so nothing
/// persists these. Storing them needs a password hash in place of the plain secret.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Deserialize, Debug)]
pub struct NewUserBody {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

fn parse_password(password: Option<Secret<String>>) -> Result<Secret<String>, String> {
    match password {
        None => Err(String::from("is required")),
        Some(password) if password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH => Err(
            format!("must be at least {} characters", MIN_PASSWORD_LENGTH),
        ),
        Some(password) => Ok(password),
    }
}

impl InsertPayload for NewUserBody {
    const KIND: EntityKind = EntityKind::User;
    type Validated = NewUser;

    fn validate(self) -> Result<NewUser, ValidationError> {
        let mut errors = FieldErrors::default();
        let username = errors.check("username", required_text(self.username));
        let password = errors.check("password", parse_password(self.password));

        let (Some(username), Some(password)) = (username, password) else {
            return Err(errors.into_error());
        };

        Ok(NewUser { username, password })
    }
}
