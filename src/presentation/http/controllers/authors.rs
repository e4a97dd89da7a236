// src/presentation/http/controllers/authors.rs
use crate::application::{
    commands::authors::{
        CreateAuthorCommand, DeleteAuthorByNameAndEmailCommand, DeleteAuthorCommand,
    },
    dto::{AuthorDto, CreatedDto},
    queries::authors::{GetAuthorByIdQuery, ListAuthorsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthorKeyParams {
    /// Exact author name.
    pub name: String,
    /// Exact author email.
    pub email: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/authors",
    responses(
        (status = 200, description = "All authors.", body = [AuthorDto]),
        (status = 503, description = "Storage unavailable.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn list_authors(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AuthorDto>>> {
    state
        .services
        .author_queries
        .list_authors(ListAuthorsQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/authors/{id}",
    params(("id" = String, Path, description = "Author id (UUID)")),
    responses(
        (status = 200, description = "The author.", body = AuthorDto),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "Author not found.", body = ErrorResponse),
        (status = 503, description = "Storage unavailable.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn get_author_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .author_queries
        .get_author_by_id(GetAuthorByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/authors",
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "Author created, or the existing one returned.", body = CreatedDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 503, description = "Storage unavailable.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn create_author(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateAuthorRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<CreatedDto>)> {
    let Json(payload) = payload.map_err(HttpError::from_json_rejection)?;
    let created = state
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: payload.name,
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/authors/{id}",
    params(("id" = String, Path, description = "Author id (UUID)")),
    responses(
        (status = 200, description = "Author and its articles deleted.", body = StatusResponse),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "Author not found.", body = ErrorResponse),
        (status = 503, description = "Storage unavailable.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn delete_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .author_commands
        .delete_author(DeleteAuthorCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/authors",
    params(AuthorKeyParams),
    responses(
        (status = 200, description = "Author and its articles deleted.", body = StatusResponse),
        (status = 400, description = "Missing name or email.", body = ErrorResponse),
        (status = 404, description = "Author not found.", body = ErrorResponse),
        (status = 503, description = "Storage unavailable.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn delete_author_by_name_and_email(
    Extension(state): Extension<HttpState>,
    params: Result<Query<AuthorKeyParams>, QueryRejection>,
) -> HttpResult<Json<StatusResponse>> {
    let Query(params) = params.map_err(HttpError::from_query_rejection)?;
    state
        .services
        .author_commands
        .delete_author_by_name_and_email(DeleteAuthorByNameAndEmailCommand {
            name: params.name,
            email: params.email,
        })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
