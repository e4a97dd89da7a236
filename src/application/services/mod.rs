// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, authors::AuthorCommandService},
        queries::{articles::ArticleQueryService, authors::AuthorQueryService},
    },
    domain::{
        article::ArticleRepository,
        author::{AuthorRepository, AuthorResolutionService},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub author_commands: Arc<AuthorCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        author_repo: Arc<dyn AuthorRepository>,
    ) -> Self {
        let author_resolution = Arc::new(AuthorResolutionService::new(Arc::clone(&author_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&author_resolution),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&author_repo),
        ));
        let author_commands = Arc::new(AuthorCommandService::new(
            Arc::clone(&author_repo),
            Arc::clone(&author_resolution),
        ));
        let author_queries = Arc::new(AuthorQueryService::new(Arc::clone(&author_repo)));

        Self {
            article_commands,
            article_queries,
            author_commands,
            author_queries,
        }
    }
}
