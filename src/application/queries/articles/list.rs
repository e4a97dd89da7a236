use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::author::{Author, AuthorId},
};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ListArticlesQuery;

impl ArticleQueryService {
    /// Lists every article and fills in author details with a single batch
    /// lookup instead of one query per article.
    pub async fn list_articles(&self, _query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.article_repo.list_articles().await?;
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let author_ids: Vec<AuthorId> = articles
            .iter()
            .map(|article| article.author_id)
            .filter(|id| seen.insert(*id))
            .collect();

        let authors: HashMap<AuthorId, Author> = self
            .author_repo
            .get_authors_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|author| (author.id, author))
            .collect();

        Ok(articles
            .into_iter()
            .map(|article| {
                let author = authors.get(&article.author_id);
                ArticleDto::hydrated(article, author)
            })
            .collect())
    }
}
