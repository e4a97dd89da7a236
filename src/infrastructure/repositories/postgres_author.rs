// src/infrastructure/repositories/postgres_author.rs
use super::map_sqlx;
use crate::domain::author::{Author, AuthorId, AuthorRepository, NewAuthor};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const LIST_AUTHORS: &str = "SELECT id, name, email FROM authors";
const GET_AUTHOR_BY_ID: &str = "SELECT id, name, email FROM authors WHERE id = $1";
const GET_AUTHORS_BY_IDS: &str = "SELECT id, name, email FROM authors WHERE id = ANY($1)";
const GET_AUTHOR_BY_NAME_AND_EMAIL: &str =
    "SELECT id, name, email FROM authors WHERE name = $1 AND email = $2 LIMIT 1";
const INSERT_AUTHOR: &str = "INSERT INTO authors (name, email) VALUES ($1, $2) RETURNING id";
const DELETE_AUTHOR_BY_ID: &str = "DELETE FROM authors WHERE id = $1";
const DELETE_AUTHOR_BY_NAME_AND_EMAIL: &str = "DELETE FROM authors WHERE name = $1 AND email = $2";

#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: Uuid,
    name: String,
    email: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: AuthorId::from(row.id),
            name: row.name,
            email: row.email,
        }
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn list_authors(&self) -> DomainResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(LIST_AUTHORS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("cannot list authors"))?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn get_author_by_id(&self, id: AuthorId) -> DomainResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(GET_AUTHOR_BY_ID)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx("cannot scan author"))?;

        row.map(Author::from).ok_or(DomainError::AuthorNotFound)
    }

    async fn get_authors_by_ids(&self, ids: &[AuthorId]) -> DomainResult<Vec<Author>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = ids.iter().copied().map(Uuid::from).collect();
        let rows = sqlx::query_as::<_, AuthorRow>(GET_AUTHORS_BY_IDS)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("cannot list authors by ids"))?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn get_author_by_name_and_email(&self, name: &str, email: &str) -> DomainResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(GET_AUTHOR_BY_NAME_AND_EMAIL)
            .bind(name)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx("cannot scan author"))?;

        row.map(Author::from).ok_or(DomainError::AuthorNotFound)
    }

    async fn add_author(&self, author: NewAuthor) -> DomainResult<AuthorId> {
        let NewAuthor { name, email } = author;

        let id = sqlx::query_scalar::<_, Uuid>(INSERT_AUTHOR)
            .bind(name)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx("cannot insert author"))?;

        Ok(AuthorId::from(id))
    }

    async fn delete_author_by_id(&self, id: AuthorId) -> DomainResult<()> {
        let result = sqlx::query(DELETE_AUTHOR_BY_ID)
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx("cannot delete author"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::AuthorNotFound);
        }
        Ok(())
    }

    async fn delete_author_by_name_and_email(&self, name: &str, email: &str) -> DomainResult<()> {
        let result = sqlx::query(DELETE_AUTHOR_BY_NAME_AND_EMAIL)
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx("cannot delete author"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::AuthorNotFound);
        }
        Ok(())
    }
}
