pub mod catalog_page;
pub mod raw_book;

pub use catalog_page::CatalogPage;
pub use raw_book::{ImageLinks, IndustryIdentifier, RawBook};
