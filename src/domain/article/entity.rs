// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::AuthorId;
use chrono::{DateTime, Utc};

/// A persisted article. Only the author's id is carried; name and email are
/// resolved separately by whoever needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
    pub author_id: AuthorId,
}

/// Article waiting to be inserted. `author_id` must already exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub author_id: AuthorId,
}

impl NewArticle {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }
}
