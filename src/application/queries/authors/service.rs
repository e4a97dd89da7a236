use std::sync::Arc;

use crate::domain::author::AuthorRepository;

pub struct AuthorQueryService {
    pub(super) author_repo: Arc<dyn AuthorRepository>,
}

impl AuthorQueryService {
    pub fn new(author_repo: Arc<dyn AuthorRepository>) -> Self {
        Self { author_repo }
    }
}
