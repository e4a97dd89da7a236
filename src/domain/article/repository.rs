use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// All articles with only `author_id` populated.
    async fn list_articles(&self) -> DomainResult<Vec<Article>>;

    /// Fails with `ArticleNotFound` when no row matches.
    async fn get_article_by_id(&self, id: ArticleId) -> DomainResult<Article>;

    /// Inserts the article and returns the assigned id. A dangling
    /// `author_id` is an infrastructure failure, not `AuthorNotFound`.
    async fn add_article(&self, article: NewArticle) -> DomainResult<ArticleId>;

    /// Fails with `ArticleNotFound` when zero rows were affected.
    async fn delete_article_by_id(&self, id: ArticleId) -> DomainResult<()>;
}
