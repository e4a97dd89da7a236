use crate::domain::author::entity::{Author, NewAuthor};
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn list_authors(&self) -> DomainResult<Vec<Author>>;

    /// Fails with `AuthorNotFound` when no row matches.
    async fn get_author_by_id(&self, id: AuthorId) -> DomainResult<Author>;

    /// Best-effort batch lookup: unknown ids are skipped, order is unspecified.
    async fn get_authors_by_ids(&self, ids: &[AuthorId]) -> DomainResult<Vec<Author>>;

    /// Exact match on the natural key; `AuthorNotFound` otherwise.
    async fn get_author_by_name_and_email(&self, name: &str, email: &str) -> DomainResult<Author>;

    /// Unconditional insert. Duplicate natural keys are accepted here; callers
    /// wanting idempotence go through find-or-create.
    async fn add_author(&self, author: NewAuthor) -> DomainResult<AuthorId>;

    /// Removes the author and, through the storage engine, its articles.
    async fn delete_author_by_id(&self, id: AuthorId) -> DomainResult<()>;

    async fn delete_author_by_name_and_email(&self, name: &str, email: &str) -> DomainResult<()>;
}
