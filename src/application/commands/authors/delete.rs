use super::AuthorCommandService;
use crate::{
    application::error::{ApplicationResult, parse_id},
    domain::author::AuthorId,
};

pub struct DeleteAuthorCommand {
    pub id: String,
}

pub struct DeleteAuthorByNameAndEmailCommand {
    pub name: String,
    pub email: String,
}

impl AuthorCommandService {
    /// Articles written by the author go with it.
    pub async fn delete_author(&self, command: DeleteAuthorCommand) -> ApplicationResult<()> {
        let id: AuthorId = parse_id("author", &command.id)?;
        self.author_repo.delete_author_by_id(id).await?;
        tracing::info!(author_id = %id, "author deleted");
        Ok(())
    }

    pub async fn delete_author_by_name_and_email(
        &self,
        command: DeleteAuthorByNameAndEmailCommand,
    ) -> ApplicationResult<()> {
        self.author_repo
            .delete_author_by_name_and_email(&command.name, &command.email)
            .await?;
        tracing::info!("author deleted by name and email");
        Ok(())
    }
}
