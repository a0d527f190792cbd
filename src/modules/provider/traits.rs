use crate::modules::provider::domain::{BookProvider, CatalogPage};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// A searchable book catalog that can be paged through
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// Get the provider type this catalog talks to
    fn provider_type(&self) -> BookProvider;

    /// Fetch `batch_size` hits for `query` starting at `start_index`.
    ///
    /// HTTP 429 must surface as `AppError::RateLimitError` so callers can take
    /// the cooldown path instead of the generic retry path.
    async fn fetch_page(
        &self,
        query: &str,
        start_index: u32,
        batch_size: u32,
    ) -> AppResult<CatalogPage>;
}

/// External translation collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> AppResult<String>;
}
