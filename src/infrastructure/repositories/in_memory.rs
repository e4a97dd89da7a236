// src/infrastructure/repositories/in_memory.rs
//! Process-local storage engine implementing both repositories.
//!
//! It mirrors what the Postgres schema enforces: ids are assigned on insert,
//! `posted_at` is stamped at second precision, an article must reference an
//! existing author, and removing an author cascades to its articles.

use crate::application::ports::time::Clock;
use crate::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use crate::domain::author::{Author, AuthorId, AuthorRepository, NewAuthor};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::SubsecRound;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    authors: Vec<Author>,
    articles: Vec<Article>,
}

#[derive(Debug, thiserror::Error)]
#[error("article references unknown author {0}")]
struct ForeignKeyViolation(AuthorId);

#[derive(Clone)]
pub struct InMemoryBlogRepository {
    tables: Arc<RwLock<Tables>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryBlogRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            clock,
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(poisoned)
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(poisoned)
    }
}

fn poisoned<T>(err: PoisonError<T>) -> DomainError {
    DomainError::infrastructure("in-memory store poisoned", err.to_string())
}

impl Tables {
    fn remove_authors_where(&mut self, predicate: impl Fn(&Author) -> bool) -> usize {
        let removed: HashSet<AuthorId> = self
            .authors
            .iter()
            .filter(|&author| predicate(author))
            .map(|author| author.id)
            .collect();
        if removed.is_empty() {
            return 0;
        }

        self.authors.retain(|author| !removed.contains(&author.id));
        self.articles
            .retain(|article| !removed.contains(&article.author_id));
        removed.len()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryBlogRepository {
    async fn list_articles(&self) -> DomainResult<Vec<Article>> {
        Ok(self.read()?.articles.clone())
    }

    async fn get_article_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        self.read()?
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or(DomainError::ArticleNotFound)
    }

    async fn add_article(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut tables = self.write()?;
        if !tables.authors.iter().any(|a| a.id == article.author_id) {
            return Err(DomainError::infrastructure(
                "cannot insert article",
                ForeignKeyViolation(article.author_id),
            ));
        }

        let id = ArticleId::from(Uuid::new_v4());
        tables.articles.push(Article {
            id,
            title: article.title,
            body: article.body,
            posted_at: self.clock.now().trunc_subsecs(0),
            author_id: article.author_id,
        });
        Ok(id)
    }

    async fn delete_article_by_id(&self, id: ArticleId) -> DomainResult<()> {
        let mut tables = self.write()?;
        let before = tables.articles.len();
        tables.articles.retain(|article| article.id != id);
        if tables.articles.len() == before {
            return Err(DomainError::ArticleNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryBlogRepository {
    async fn list_authors(&self) -> DomainResult<Vec<Author>> {
        Ok(self.read()?.authors.clone())
    }

    async fn get_author_by_id(&self, id: AuthorId) -> DomainResult<Author> {
        self.read()?
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
            .ok_or(DomainError::AuthorNotFound)
    }

    async fn get_authors_by_ids(&self, ids: &[AuthorId]) -> DomainResult<Vec<Author>> {
        let wanted: HashSet<&AuthorId> = ids.iter().collect();
        Ok(self
            .read()?
            .authors
            .iter()
            .filter(|author| wanted.contains(&author.id))
            .cloned()
            .collect())
    }

    async fn get_author_by_name_and_email(&self, name: &str, email: &str) -> DomainResult<Author> {
        self.read()?
            .authors
            .iter()
            .find(|author| author.matches(name, email))
            .cloned()
            .ok_or(DomainError::AuthorNotFound)
    }

    async fn add_author(&self, author: NewAuthor) -> DomainResult<AuthorId> {
        let id = AuthorId::from(Uuid::new_v4());
        self.write()?.authors.push(Author {
            id,
            name: author.name,
            email: author.email,
        });
        Ok(id)
    }

    async fn delete_author_by_id(&self, id: AuthorId) -> DomainResult<()> {
        if self.write()?.remove_authors_where(|author| author.id == id) == 0 {
            return Err(DomainError::AuthorNotFound);
        }
        Ok(())
    }

    async fn delete_author_by_name_and_email(&self, name: &str, email: &str) -> DomainResult<()> {
        if self
            .write()?
            .remove_authors_where(|author| author.matches(name, email))
            == 0
        {
            return Err(DomainError::AuthorNotFound);
        }
        Ok(())
    }
}
