// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Rejects blank required text before it reaches a repository.
pub(crate) fn require_non_empty(field: &str, value: &str) -> ApplicationResult<()> {
    if value.trim().is_empty() {
        return Err(ApplicationError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Parses a caller-supplied identifier, turning syntax errors into validation
/// failures so they never reach storage.
pub(crate) fn parse_id<T>(kind: &str, raw: &str) -> ApplicationResult<T>
where
    T: std::str::FromStr,
{
    raw.parse()
        .map_err(|_| ApplicationError::validation(format!("invalid {kind} id: {raw}")))
}
