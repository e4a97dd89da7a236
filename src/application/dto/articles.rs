use crate::domain::article::Article;
use crate::domain::author::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
    pub author: ArticleAuthorDto,
}

/// Author as embedded in an article. Name and email are absent when the
/// author could not be resolved at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleAuthorDto {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ArticleDto {
    pub fn hydrated(article: Article, author: Option<&Author>) -> Self {
        let author = match author {
            Some(author) if author.id == article.author_id => ArticleAuthorDto {
                id: author.id.into(),
                name: Some(author.name.clone()),
                email: Some(author.email.clone()),
            },
            _ => ArticleAuthorDto {
                id: article.author_id.into(),
                name: None,
                email: None,
            },
        };

        Self {
            id: article.id.into(),
            title: article.title,
            body: article.body,
            posted_at: article.posted_at,
            author,
        }
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self::hydrated(article, None)
    }
}
