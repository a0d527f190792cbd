use super::mapper::OpenLibraryMapper;
use super::models::SearchResponse;
use crate::modules::provider::domain::{BookProvider, CatalogPage};
use crate::modules::provider::infrastructure::http_client::JsonClient;
use crate::modules::provider::traits::BookCatalog;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use std::time::{Duration, Instant};

const SEARCH_FIELDS: &str = "key,title,author_name,cover_i,first_publish_year,number_of_pages_median,publisher,subject,language,isbn,first_sentence";

/// Open Library search (keyless)
pub struct OpenLibraryAdapter {
    http_client: JsonClient,
    base_url: String,
}

impl OpenLibraryAdapter {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            http_client: JsonClient::new(BookProvider::OpenLibrary.display_name(), timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, query: &str, offset: u32, limit: u32) -> String {
        format!(
            "{}/search.json?q={}&offset={}&limit={}&fields={}",
            self.base_url,
            urlencoding::encode(query),
            offset,
            limit,
            SEARCH_FIELDS
        )
    }
}

#[async_trait]
impl BookCatalog for OpenLibraryAdapter {
    fn provider_type(&self) -> BookProvider {
        BookProvider::OpenLibrary
    }

    async fn fetch_page(
        &self,
        query: &str,
        start_index: u32,
        batch_size: u32,
    ) -> AppResult<CatalogPage> {
        let url = self.search_url(query, start_index, batch_size);
        let started = Instant::now();
        LogContext::api_call(self.http_client.provider_name(), "search.json", "GET", None);

        let result = self.http_client.get::<SearchResponse>(&url).await;
        LogContext::api_call(
            self.http_client.provider_name(),
            "search.json",
            if result.is_ok() { "ok" } else { "failed" },
            Some(started.elapsed().as_millis() as u64),
        );

        Ok(OpenLibraryMapper::to_page(result?))
    }
}
