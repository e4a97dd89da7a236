use std::sync::Arc;

use crate::domain::{article::ArticleRepository, author::AuthorRepository};

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
}

impl ArticleQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        author_repo: Arc<dyn AuthorRepository>,
    ) -> Self {
        Self {
            article_repo,
            author_repo,
        }
    }
}
