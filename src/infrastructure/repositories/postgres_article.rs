// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use crate::domain::author::AuthorId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const LIST_ARTICLES: &str = "SELECT id, title, body, posted_at, author_id FROM articles";
const GET_ARTICLE_BY_ID: &str =
    "SELECT id, title, body, posted_at, author_id FROM articles WHERE id = $1";
const INSERT_ARTICLE: &str =
    "INSERT INTO articles (title, body, author_id) VALUES ($1, $2, $3) RETURNING id";
const DELETE_ARTICLE_BY_ID: &str = "DELETE FROM articles WHERE id = $1";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    body: String,
    posted_at: DateTime<Utc>,
    author_id: Uuid,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: ArticleId::from(row.id),
            title: row.title,
            body: row.body,
            posted_at: row.posted_at,
            author_id: AuthorId::from(row.author_id),
        }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn list_articles(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(LIST_ARTICLES)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("cannot list articles"))?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn get_article_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(GET_ARTICLE_BY_ID)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx("cannot scan article"))?;

        row.map(Article::from).ok_or(DomainError::ArticleNotFound)
    }

    async fn add_article(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle {
            title,
            body,
            author_id,
        } = article;

        let id = sqlx::query_scalar::<_, Uuid>(INSERT_ARTICLE)
            .bind(title)
            .bind(body)
            .bind(Uuid::from(author_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx("cannot insert article"))?;

        Ok(ArticleId::from(id))
    }

    async fn delete_article_by_id(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query(DELETE_ARTICLE_BY_ID)
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx("cannot delete article"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::ArticleNotFound);
        }
        Ok(())
    }
}
