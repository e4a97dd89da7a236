// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory;
mod postgres_article;
mod postgres_author;

pub use error::map_sqlx;
pub use in_memory::InMemoryBlogRepository;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_author::PostgresAuthorRepository;
