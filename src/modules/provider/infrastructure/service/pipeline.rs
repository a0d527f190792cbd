use crate::modules::book::Book;
use crate::modules::provider::domain::{BookProvider, ResultNormalizer};
use crate::modules::provider::infrastructure::cache::SearchCache;
use crate::modules::provider::infrastructure::http_client::{QueueConfig, RequestQueue};
use crate::modules::provider::infrastructure::pagination::{PaginationConfig, PaginationDriver};
use crate::modules::provider::traits::BookCatalog;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::utils::Validator;
use std::sync::Arc;
use tracing::debug;

/// One provider's search path: cache, then paginated fetch through the
/// provider's own request queue.
pub struct BookSearchPipeline {
    provider: BookProvider,
    driver: PaginationDriver,
    cache: SearchCache,
}

impl BookSearchPipeline {
    pub fn new(
        catalog: Arc<dyn BookCatalog>,
        normalizer: Arc<ResultNormalizer>,
        queue_config: QueueConfig,
        pagination_config: PaginationConfig,
    ) -> Self {
        let provider = catalog.provider_type();
        let queue = RequestQueue::new(provider.display_name(), queue_config);

        Self {
            provider,
            driver: PaginationDriver::new(catalog, queue, normalizer, pagination_config),
            cache: SearchCache::new(),
        }
    }

    pub fn provider(&self) -> BookProvider {
        self.provider
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// Every hit for `query` from this provider, normalized and id-deduplicated.
    ///
    /// Blank queries return nothing without touching the network. A walk that
    /// ran to its natural end is cached under the query exactly as given,
    /// empty or not. Partial results from an interrupted walk are returned
    /// but not cached.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        Validator::validate_search_query(query)?;

        if let Some(cached) = self.cache.get(query) {
            debug!(
                "{} served '{}' from cache ({} books)",
                self.provider, query, cached.len()
            );
            return Ok(cached);
        }

        let provider_name = self.provider.display_name();
        LogContext::search_operation(query, Some(provider_name), None);
        let timer = TimedOperation::new(&format!("{} search", provider_name));

        let outcome = self.driver.fetch_all(query).await;
        let books = outcome.books;

        timer.finish_with_info(&format!("{} books", books.len()));
        LogContext::search_operation(query, Some(provider_name), Some(books.len()));

        if outcome.complete {
            self.cache.set(query, books.clone());
        } else {
            debug!(
                "{} walk for '{}' was interrupted, not caching {} books",
                self.provider,
                query,
                books.len()
            );
        }
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::domain::{CatalogPage, RawBook};
    use crate::modules::provider::infrastructure::translation::NoopTranslator;
    use crate::modules::provider::traits::MockBookCatalog;
    use crate::shared::errors::AppError;

    fn pipeline(catalog: MockBookCatalog) -> BookSearchPipeline {
        BookSearchPipeline::new(
            Arc::new(catalog),
            Arc::new(ResultNormalizer::new(Arc::new(NoopTranslator), "fr")),
            QueueConfig::immediate(),
            PaginationConfig::immediate(),
        )
    }

    fn catalog() -> MockBookCatalog {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_provider_type()
            .return_const(BookProvider::OpenLibrary);
        catalog
    }

    #[tokio::test]
    async fn test_second_search_is_served_from_cache() {
        let mut catalog = catalog();
        catalog.expect_fetch_page().times(1).returning(|_, _, _| {
            Ok(CatalogPage::new(
                vec![RawBook::new("OL1W", Some("La Chute"))],
                Some(1),
            ))
        });
        let pipeline = pipeline(catalog);

        let first = pipeline.search("Camus").await.unwrap();
        let second = pipeline.search("Camus").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(pipeline.cache().stats().hits, 1);
    }

    #[tokio::test]
    async fn test_interrupted_walk_is_not_cached() {
        let mut catalog = catalog();
        let mut seq = mockall::Sequence::new();
        catalog
            .expect_fetch_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Err(AppError::ApiError("400 Bad Request".to_string())));
        catalog
            .expect_fetch_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                Ok(CatalogPage::new(
                    vec![RawBook::new("OL1W", Some("La Chute"))],
                    Some(1),
                ))
            });
        let pipeline = pipeline(catalog);

        assert!(pipeline.search("Camus").await.unwrap().is_empty());
        assert!(pipeline.cache().is_empty());

        let second = pipeline.search("Camus").await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(pipeline.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_query_makes_no_request() {
        let mut catalog = catalog();
        catalog.expect_fetch_page().never();
        let pipeline = pipeline(catalog);

        assert!(pipeline.search("   ").await.unwrap().is_empty());
        assert!(pipeline.cache().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_query_is_rejected() {
        let mut catalog = catalog();
        catalog.expect_fetch_page().never();
        let pipeline = pipeline(catalog);

        let result = pipeline.search(&"a".repeat(501)).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
