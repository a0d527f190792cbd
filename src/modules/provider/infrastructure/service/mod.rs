pub mod aggregation;
pub mod pipeline;

pub use aggregation::SearchAggregator;
pub use pipeline::BookSearchPipeline;
