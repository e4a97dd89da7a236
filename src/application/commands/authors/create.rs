use super::AuthorCommandService;
use crate::{
    application::{
        dto::CreatedDto,
        error::{ApplicationResult, require_non_empty},
    },
    domain::author::NewAuthor,
};

pub struct CreateAuthorCommand {
    pub name: String,
    pub email: String,
}

impl AuthorCommandService {
    /// Idempotent on `(name, email)`: submitting an existing pair returns the
    /// id already on record.
    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<CreatedDto> {
        require_non_empty("name", &command.name)?;
        require_non_empty("email", &command.email)?;

        let id = self
            .author_resolution
            .find_or_create(NewAuthor::new(command.name, command.email))
            .await?;
        Ok(CreatedDto::new(id))
    }
}
