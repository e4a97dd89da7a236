// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::CreatedDto,
        error::{ApplicationResult, require_non_empty},
    },
    domain::{article::NewArticle, author::NewAuthor},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub author_name: String,
    pub author_email: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    author_name: Option<String>,
    author_email: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self.author_email = Some(email.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            author_name: self.author_name.ok_or("author name is required")?,
            author_email: self.author_email.ok_or("author email is required")?,
        })
    }
}

impl ArticleCommandService {
    /// Resolves the author by `(name, email)`, creating it when missing, then
    /// inserts the article under that author. The two writes are not atomic.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreatedDto> {
        require_non_empty("title", &command.title)?;
        require_non_empty("body", &command.body)?;
        require_non_empty("author name", &command.author_name)?;
        require_non_empty("author email", &command.author_email)?;

        let author_id = self
            .author_resolution
            .find_or_create(NewAuthor::new(command.author_name, command.author_email))
            .await?;

        let id = self
            .article_repo
            .add_article(NewArticle::new(command.title, command.body, author_id))
            .await?;

        tracing::info!(article_id = %id, author_id = %author_id, "article created");
        Ok(CreatedDto::new(id))
    }
}
