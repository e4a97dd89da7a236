// src/domain/author/services.rs
use std::sync::Arc;

use crate::domain::author::entity::NewAuthor;
use crate::domain::author::repository::AuthorRepository;
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service that makes author identity idempotent on `(name, email)`.
///
/// Lookup and insert are two separate statements, so two concurrent first-time
/// submissions of the same pair can both insert.
pub struct AuthorResolutionService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorResolutionService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    /// Returns the id of the author matching `(name, email)`, inserting one
    /// if none exists. Any failure other than `AuthorNotFound` from the lookup
    /// aborts before anything is written.
    pub async fn find_or_create(&self, author: NewAuthor) -> DomainResult<AuthorId> {
        match self
            .repo
            .get_author_by_name_and_email(&author.name, &author.email)
            .await
        {
            Ok(existing) => {
                tracing::debug!(author_id = %existing.id, "reusing existing author");
                Ok(existing.id)
            }
            Err(DomainError::AuthorNotFound) => {
                let id = self.repo.add_author(author).await?;
                tracing::debug!(author_id = %id, "created author");
                Ok(id)
            }
            Err(other) => Err(other),
        }
    }
}
