use crate::domain::author::Author;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            name: author.name,
            email: author.email,
        }
    }
}

/// Identifier assigned to a freshly created resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub id: Uuid,
}

impl CreatedDto {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self { id: id.into() }
    }
}
