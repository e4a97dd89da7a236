// src/application/commands/authors/mod.rs
mod create;
mod delete;
mod service;

pub use create::CreateAuthorCommand;
pub use delete::{DeleteAuthorByNameAndEmailCommand, DeleteAuthorCommand};
pub use service::AuthorCommandService;
