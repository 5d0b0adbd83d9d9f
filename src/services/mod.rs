pub mod contacts;
pub mod listings;
pub mod newsletters;
pub mod subscriptions;
pub mod volunteers;

use crate::domain::validation::ValidationError;

const UNIQUE_VIOLATION: &str = "23505";

#[derive(thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0} was not found.")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Failed to access the content store.")]
    Storage(#[source] sqlx::Error),
}

impl std::fmt::Debug for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Unique-constraint violations become `Conflict`; everything else is a storage failure.
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        let conflict = err
            .as_database_error()
            .filter(|db_err| db_err.code().as_deref() == Some(UNIQUE_VIOLATION))
            .map(|db_err| db_err.message().to_string());

        match conflict {
            Some(message) => ServiceError::Conflict(message),
            None => ServiceError::Storage(err),
        }
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Turns a domain parse failure on a stored row into a decode error.
pub(crate) fn decode_error(reason: String) -> sqlx::Error {
    sqlx::Error::Decode(reason.into())
}
