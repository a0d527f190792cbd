pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{CatalogPage, ImageLinks, IndustryIdentifier, RawBook};
pub use services::ResultNormalizer;
pub use value_objects::BookProvider;
