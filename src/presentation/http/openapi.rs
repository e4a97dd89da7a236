// src/presentation/http/openapi.rs
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_id,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::authors::list_authors,
        crate::presentation::http::controllers::authors::get_author_by_id,
        crate::presentation::http::controllers::authors::create_author,
        crate::presentation::http::controllers::authors::delete_author,
        crate::presentation::http::controllers::authors::delete_author_by_name_and_email,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::ArticleAuthorRequest,
            crate::presentation::http::controllers::authors::CreateAuthorRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleAuthorDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::CreatedDto
        )
    ),
    tags(
        (name = "Articles", description = "Article endpoints"),
        (name = "Authors", description = "Author endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blog API",
        description = "Articles and authors backed by PostgreSQL",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
