pub mod articles;
pub mod authors;

pub use articles::{ArticleAuthorDto, ArticleDto};
pub use authors::{AuthorDto, CreatedDto};
