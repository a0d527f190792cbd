pub mod commands;
pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use domain::{BookProvider, CatalogPage, RawBook, ResultNormalizer};
pub use infrastructure::{BookSearchPipeline, SearchAggregator};
pub use traits::{BookCatalog, Translator};
