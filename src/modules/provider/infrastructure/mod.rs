pub mod adapters;
pub mod cache;
pub mod http_client;
pub mod pagination;
pub mod service;
pub mod translation;

pub use adapters::{GoogleBooksAdapter, OpenLibraryAdapter};
pub use cache::SearchCache;
pub use http_client::{QueueConfig, RequestQueue};
pub use pagination::{PaginationConfig, PaginationDriver, PaginationOutcome};
pub use service::{BookSearchPipeline, SearchAggregator};
pub use translation::{LibreTranslateTranslator, NoopTranslator};
