// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::domain::author::{AuthorRepository, AuthorResolutionService};

pub struct AuthorCommandService {
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) author_resolution: Arc<AuthorResolutionService>,
}

impl AuthorCommandService {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        author_resolution: Arc<AuthorResolutionService>,
    ) -> Self {
        Self {
            author_repo,
            author_resolution,
        }
    }
}
