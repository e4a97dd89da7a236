use super::AuthorQueryService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationResult, parse_id},
    },
    domain::author::AuthorId,
};

pub struct GetAuthorByIdQuery {
    pub id: String,
}

impl AuthorQueryService {
    pub async fn get_author_by_id(&self, query: GetAuthorByIdQuery) -> ApplicationResult<AuthorDto> {
        let id: AuthorId = parse_id("author", &query.id)?;
        let author = self.author_repo.get_author_by_id(id).await?;
        Ok(author.into())
    }
}
