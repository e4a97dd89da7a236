use super::AuthorQueryService;
use crate::application::{dto::AuthorDto, error::ApplicationResult};

#[derive(Debug, Default)]
pub struct ListAuthorsQuery;

impl AuthorQueryService {
    pub async fn list_authors(&self, _query: ListAuthorsQuery) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.author_repo.list_authors().await?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}
