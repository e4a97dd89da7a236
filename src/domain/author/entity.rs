// src/domain/author/entity.rs
use crate::domain::author::value_objects::AuthorId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
}

/// Author prior to insertion. `(name, email)` is the natural key used by
/// find-or-create and by natural-key deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Author {
    pub fn matches(&self, name: &str, email: &str) -> bool {
        self.name == name && self.email == email
    }
}
