// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationResult, parse_id},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id: ArticleId = parse_id("article", &command.id)?;
        self.article_repo.delete_article_by_id(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
