// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::{article::ArticleRepository, author::AuthorResolutionService};

pub struct ArticleCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) author_resolution: Arc<AuthorResolutionService>,
}

impl ArticleCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        author_resolution: Arc<AuthorResolutionService>,
    ) -> Self {
        Self {
            article_repo,
            author_resolution,
        }
    }
}
