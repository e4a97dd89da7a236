mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetAuthorByIdQuery;
pub use list::ListAuthorsQuery;
pub use service::AuthorQueryService;
