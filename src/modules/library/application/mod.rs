pub mod export;
pub mod service;

pub use export::{export_books, parse_import};
pub use service::LibraryService;
