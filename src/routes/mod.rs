mod contact;
mod health_check;
mod listings;
mod newsletters;
mod subscriptions;
mod volunteers;

pub use contact::*;
pub use health_check::*;
pub use listings::*;
pub use newsletters::*;
pub use subscriptions::*;
pub use volunteers::*;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::domain::validation::FieldError;
use crate::services::ServiceError;

/// Body returned by every write endpoint and by every error.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorBody>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct FieldErrorBody {
    pub field: String,
    pub reason: String,
}

impl From<&FieldError> for FieldErrorBody {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.clone(),
            reason: error.reason.clone(),
        }
    }
}

impl ApiResponse {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            errors: Vec::new(),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            errors: Vec::new(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Validation(validation) => ApiResponse {
                success: false,
                message: Some(String::from("Please fill in all required fields correctly.")),
                errors: validation.errors.iter().map(FieldErrorBody::from).collect(),
            },
            ServiceError::Storage(_) => {
                tracing::error!("Storage failure: {:?}", self);
                ApiResponse::failure("Something went wrong. Please try again.")
            }
            other => ApiResponse::failure(&other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
