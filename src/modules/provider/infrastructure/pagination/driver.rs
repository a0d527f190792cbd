//! Walks a catalog page by page until the result set is exhausted
//!
//! Stop conditions, in order: an empty page, the provider's reported total,
//! the hard cap on start index. Ids already seen earlier in the walk are
//! dropped before normalization. A failure ends the walk early and keeps
//! whatever was accumulated, flagged as incomplete.

use crate::modules::book::Book;
use crate::modules::provider::domain::{CatalogPage, ResultNormalizer};
use crate::modules::provider::infrastructure::http_client::RequestQueue;
use crate::modules::provider::traits::BookCatalog;
use crate::shared::errors::AppResult;
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    pub batch_size: u32,
    /// No request is made at or beyond this start index
    pub hard_cap: u32,
    pub page_delay: Duration,
    pub rate_limit_cooldown: Duration,
    pub max_rate_limit_waits: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            batch_size: 40,
            hard_cap: 400,
            page_delay: Duration::from_millis(1500),
            rate_limit_cooldown: Duration::from_millis(5000),
            max_rate_limit_waits: 3,
        }
    }
}

impl PaginationConfig {
    pub fn immediate() -> Self {
        Self {
            page_delay: Duration::ZERO,
            rate_limit_cooldown: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn max_pages(&self) -> u32 {
        self.hard_cap.div_ceil(self.batch_size.max(1))
    }
}

/// Books gathered by one walk and whether it ran to a natural stop
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationOutcome {
    pub books: Vec<Book>,
    /// True when the walk stopped on the reported total, an empty page or
    /// the hard cap. False when an error cut it short.
    pub complete: bool,
}

pub struct PaginationDriver {
    catalog: Arc<dyn BookCatalog>,
    queue: RequestQueue<CatalogPage>,
    normalizer: Arc<ResultNormalizer>,
    config: PaginationConfig,
}

impl PaginationDriver {
    pub fn new(
        catalog: Arc<dyn BookCatalog>,
        queue: RequestQueue<CatalogPage>,
        normalizer: Arc<ResultNormalizer>,
        config: PaginationConfig,
    ) -> Self {
        Self {
            catalog,
            queue,
            normalizer,
            config,
        }
    }

    pub fn catalog_name(&self) -> &'static str {
        self.catalog.provider_type().display_name()
    }

    /// Fetch and normalize every hit for `query` in provider order
    pub async fn fetch_all(&self, query: &str) -> PaginationOutcome {
        let provider = self.catalog_name();
        let batch_size = self.config.batch_size.max(1);
        let mut books = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut start_index = 0u32;
        let mut rate_limit_waits = 0u32;
        let mut first_request = true;
        let mut complete = true;

        while start_index < self.config.hard_cap {
            if !first_request {
                sleep(self.config.page_delay).await;
            }
            first_request = false;

            let page = match self.request_page(query, start_index, batch_size).await {
                Ok(page) => page,
                Err(e)
                    if e.is_rate_limit() && rate_limit_waits < self.config.max_rate_limit_waits =>
                {
                    rate_limit_waits += 1;
                    log::warn!(
                        "{} still rate limited at index {} ({}/{}), cooling down for {:?}",
                        provider,
                        start_index,
                        rate_limit_waits,
                        self.config.max_rate_limit_waits,
                        self.config.rate_limit_cooldown
                    );
                    sleep(self.config.rate_limit_cooldown).await;
                    continue;
                }
                Err(e) => {
                    log::warn!(
                        "{} pagination for '{}' stopped at index {}: {}. Keeping {} results",
                        provider,
                        query,
                        start_index,
                        e,
                        books.len()
                    );
                    complete = false;
                    break;
                }
            };

            if page.is_empty() {
                break;
            }

            let fresh: Vec<_> = page
                .items
                .into_iter()
                .filter(|raw| seen_ids.insert(raw.id.clone()))
                .collect();
            let normalized =
                join_all(fresh.into_iter().map(|raw| self.normalizer.normalize(raw))).await;
            books.extend(normalized.into_iter().flatten());

            start_index += batch_size;
            if let Some(total) = page.total_items {
                if start_index >= total {
                    break;
                }
            }
        }

        log::debug!(
            "{} returned {} books for '{}' (last start index {}, complete: {})",
            provider,
            books.len(),
            query,
            start_index,
            complete
        );
        PaginationOutcome { books, complete }
    }

    async fn request_page(
        &self,
        query: &str,
        start_index: u32,
        batch_size: u32,
    ) -> AppResult<CatalogPage> {
        let catalog = Arc::clone(&self.catalog);
        let query = query.to_string();
        self.queue
            .enqueue(move || {
                let catalog = Arc::clone(&catalog);
                let query = query.clone();
                async move { catalog.fetch_page(&query, start_index, batch_size).await }
            })
            .await
    }
}
