pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Author, NewAuthor};
pub use repository::AuthorRepository;
pub use services::AuthorResolutionService;
pub use value_objects::AuthorId;
