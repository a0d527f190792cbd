use super::mapper::GoogleBooksMapper;
use super::models::VolumeList;
use crate::modules::provider::domain::{BookProvider, CatalogPage};
use crate::modules::provider::infrastructure::http_client::JsonClient;
use crate::modules::provider::traits::BookCatalog;
use crate::shared::config::GoogleBooksConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use std::time::{Duration, Instant};

const VOLUME_FIELDS: &str = "totalItems,items(id,volumeInfo)";
const LANGUAGE_RESTRICTION: &str = "fr";

/// Google Books volumes search (API key required)
pub struct GoogleBooksAdapter {
    http_client: JsonClient,
    base_url: String,
    api_key: String,
}

impl GoogleBooksAdapter {
    pub fn new(config: &GoogleBooksConfig, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            http_client: JsonClient::new(BookProvider::GoogleBooks.display_name(), timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn search_url(&self, query: &str, start_index: u32, batch_size: u32) -> String {
        format!(
            "{}/volumes?q={}&startIndex={}&maxResults={}&langRestrict={}&printType=books&fields={}&key={}",
            self.base_url,
            urlencoding::encode(query),
            start_index,
            batch_size,
            LANGUAGE_RESTRICTION,
            urlencoding::encode(VOLUME_FIELDS),
            urlencoding::encode(&self.api_key)
        )
    }
}

#[async_trait]
impl BookCatalog for GoogleBooksAdapter {
    fn provider_type(&self) -> BookProvider {
        BookProvider::GoogleBooks
    }

    async fn fetch_page(
        &self,
        query: &str,
        start_index: u32,
        batch_size: u32,
    ) -> AppResult<CatalogPage> {
        let url = self.search_url(query, start_index, batch_size);
        let started = Instant::now();
        LogContext::api_call(self.http_client.provider_name(), "volumes", "GET", None);

        let result = self.http_client.get::<VolumeList>(&url).await;
        LogContext::api_call(
            self.http_client.provider_name(),
            "volumes",
            if result.is_ok() { "ok" } else { "failed" },
            Some(started.elapsed().as_millis() as u64),
        );

        Ok(GoogleBooksMapper::to_page(result?))
    }
}
