/// Scripted in-process catalog standing in for a provider HTTP API
use async_trait::async_trait;
use bookshelf_lib::modules::provider::domain::{BookProvider, CatalogPage, RawBook};
use bookshelf_lib::modules::provider::BookCatalog;
use bookshelf_lib::shared::errors::{AppError, AppResult};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Instant;

pub enum Scripted {
    Page(CatalogPage),
    Fail(AppError),
}

/// Serves the `hits` list in `batch_size` slices, reporting `total` (if
/// any), unless a scripted response is queued for the next call.
pub struct FakeCatalog {
    provider: BookProvider,
    hits: Vec<RawBook>,
    total: Option<u32>,
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<(String, u32, Instant)>>,
}

impl FakeCatalog {
    pub fn new(provider: BookProvider, hits: Vec<RawBook>) -> Self {
        let total = Some(hits.len() as u32);
        Self {
            provider,
            hits,
            total,
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty(provider: BookProvider) -> Self {
        Self::new(provider, Vec::new())
    }

    pub fn reporting_total(mut self, total: Option<u32>) -> Self {
        self.total = total;
        self
    }

    /// Queue responses returned (in order) before the hit list is used
    pub fn then(self, response: Scripted) -> Self {
        self.script.lock().unwrap().push_back(response);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn start_indexes(&self) -> Vec<u32> {
        self.calls.lock().unwrap().iter().map(|c| c.1).collect()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|c| c.2).collect()
    }
}

#[async_trait]
impl BookCatalog for FakeCatalog {
    fn provider_type(&self) -> BookProvider {
        self.provider
    }

    async fn fetch_page(
        &self,
        query: &str,
        start_index: u32,
        batch_size: u32,
    ) -> AppResult<CatalogPage> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), start_index, Instant::now()));

        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return match next {
                Scripted::Page(page) => Ok(page),
                Scripted::Fail(error) => Err(error),
            };
        }

        let items = self
            .hits
            .iter()
            .skip(start_index as usize)
            .take(batch_size as usize)
            .cloned()
            .collect();
        Ok(CatalogPage::new(items, self.total))
    }
}
