use super::pipeline::BookSearchPipeline;
use crate::modules::book::services::deduplication::remove_duplicate_books;
use crate::modules::book::services::filters::{
    filter_non_book_results, retain_languages, FRENCH_LANGUAGE_CODES,
};
use crate::modules::book::Book;
use crate::shared::utils::logger::LogContext;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fans a query out to every provider pipeline and merges the answers
pub struct SearchAggregator {
    pipelines: Vec<Arc<BookSearchPipeline>>,
    exclude_technical_results: bool,
}

impl SearchAggregator {
    /// Pipelines are merged in the order given here.
    pub fn new(pipelines: Vec<Arc<BookSearchPipeline>>) -> Self {
        Self {
            pipelines,
            exclude_technical_results: false,
        }
    }

    pub fn with_technical_filter(mut self, enabled: bool) -> Self {
        self.exclude_technical_results = enabled;
        self
    }

    pub fn pipelines(&self) -> &[Arc<BookSearchPipeline>] {
        &self.pipelines
    }

    /// French-language books for `query` from all providers, without
    /// cross-source duplicates. A failing provider contributes nothing.
    pub async fn search(&self, query: &str) -> Vec<Book> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let searches = self.pipelines.iter().map(|pipeline| async move {
            match pipeline.search(query).await {
                Ok(books) => books,
                Err(e) => {
                    warn!("{} search for '{}' failed: {}", pipeline.provider(), query, e);
                    Vec::new()
                }
            }
        });
        let per_provider = join_all(searches).await;

        let merged: Vec<Book> = per_provider.into_iter().flatten().collect();
        let fetched = merged.len();

        let mut books = retain_languages(merged, &FRENCH_LANGUAGE_CODES);
        debug!(
            "Language filter kept {} of {} results for '{}'",
            books.len(),
            fetched,
            query
        );

        if self.exclude_technical_results {
            books = filter_non_book_results(books);
        }

        let books = remove_duplicate_books(books);
        info!(
            "Aggregated {} unique books for '{}' from {} providers",
            books.len(),
            query,
            self.pipelines.len()
        );
        LogContext::search_operation(query, None, Some(books.len()));
        books
    }
}
