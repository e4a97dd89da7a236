use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationResult, parse_id},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id: ArticleId = parse_id("article", &query.id)?;
        let article = self.article_repo.get_article_by_id(id).await?;
        let author = self.author_repo.get_author_by_id(article.author_id).await?;
        Ok(ArticleDto::hydrated(article, Some(&author)))
    }
}
