// src/domain/errors.rs
use std::{error::Error as StdError, fmt};
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Outcome taxonomy shared by every repository.
///
/// Callers branch on the two not-found variants; anything else is an
/// [`InfrastructureError`] whose cause is only meant for diagnostics.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("article not found")]
    ArticleNotFound,
    #[error("author not found")]
    AuthorNotFound,
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl DomainError {
    pub fn infrastructure(context: &'static str, cause: impl Into<BoxError>) -> Self {
        Self::Infrastructure(InfrastructureError::new(context, cause))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound | Self::AuthorNotFound)
    }
}

/// Opaque storage failure: connectivity, timeouts, constraint violations,
/// decoding problems.
#[derive(Debug)]
pub struct InfrastructureError {
    context: &'static str,
    source: BoxError,
}

impl InfrastructureError {
    pub fn new(context: &'static str, cause: impl Into<BoxError>) -> Self {
        Self {
            context,
            source: cause.into(),
        }
    }

    pub fn context(&self) -> &'static str {
        self.context
    }
}

impl fmt::Display for InfrastructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl StdError for InfrastructureError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}
