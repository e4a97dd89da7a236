// tests/support/mocks.rs
use async_trait::async_trait;
use blog_core::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use blog_core::domain::author::{Author, AuthorId, AuthorRepository, NewAuthor};
use blog_core::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic timestamp with whole seconds, as the store would persist it.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T12:30:45Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

const DOWN: &str = "connection refused (password=secret)";

fn unavailable() -> DomainError {
    DomainError::infrastructure("cannot acquire connection", DOWN)
}

/// Every operation fails as if the database were unreachable.
#[derive(Default)]
pub struct FailingRepository {
    pub calls: AtomicUsize,
}

impl FailingRepository {
    fn fail<T>(&self) -> DomainResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(unavailable())
    }
}

#[async_trait]
impl ArticleRepository for FailingRepository {
    async fn list_articles(&self) -> DomainResult<Vec<Article>> {
        self.fail()
    }

    async fn get_article_by_id(&self, _id: ArticleId) -> DomainResult<Article> {
        self.fail()
    }

    async fn add_article(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        self.fail()
    }

    async fn delete_article_by_id(&self, _id: ArticleId) -> DomainResult<()> {
        self.fail()
    }
}

#[async_trait]
impl AuthorRepository for FailingRepository {
    async fn list_authors(&self) -> DomainResult<Vec<Author>> {
        self.fail()
    }

    async fn get_author_by_id(&self, _id: AuthorId) -> DomainResult<Author> {
        self.fail()
    }

    async fn get_authors_by_ids(&self, _ids: &[AuthorId]) -> DomainResult<Vec<Author>> {
        self.fail()
    }

    async fn get_author_by_name_and_email(&self, _name: &str, _email: &str) -> DomainResult<Author> {
        self.fail()
    }

    async fn add_author(&self, _author: NewAuthor) -> DomainResult<AuthorId> {
        self.fail()
    }

    async fn delete_author_by_id(&self, _id: AuthorId) -> DomainResult<()> {
        self.fail()
    }

    async fn delete_author_by_name_and_email(&self, _name: &str, _email: &str) -> DomainResult<()> {
        self.fail()
    }
}

/// Wraps an author repository and counts batch lookups.
pub struct CountingAuthorRepository<R> {
    pub inner: R,
    pub batch_calls: AtomicUsize,
    pub single_calls: AtomicUsize,
}

impl<R> CountingAuthorRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            batch_calls: AtomicUsize::new(0),
            single_calls: AtomicUsize::new(0),
        }
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    pub fn single_calls(&self) -> usize {
        self.single_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: AuthorRepository> AuthorRepository for CountingAuthorRepository<R> {
    async fn list_authors(&self) -> DomainResult<Vec<Author>> {
        self.inner.list_authors().await
    }

    async fn get_author_by_id(&self, id: AuthorId) -> DomainResult<Author> {
        self.single_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_author_by_id(id).await
    }

    async fn get_authors_by_ids(&self, ids: &[AuthorId]) -> DomainResult<Vec<Author>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_authors_by_ids(ids).await
    }

    async fn get_author_by_name_and_email(&self, name: &str, email: &str) -> DomainResult<Author> {
        self.inner.get_author_by_name_and_email(name, email).await
    }

    async fn add_author(&self, author: NewAuthor) -> DomainResult<AuthorId> {
        self.inner.add_author(author).await
    }

    async fn delete_author_by_id(&self, id: AuthorId) -> DomainResult<()> {
        self.inner.delete_author_by_id(id).await
    }

    async fn delete_author_by_name_and_email(&self, name: &str, email: &str) -> DomainResult<()> {
        self.inner.delete_author_by_name_and_email(name, email).await
    }
}
