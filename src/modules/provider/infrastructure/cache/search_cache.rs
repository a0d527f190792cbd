use crate::modules::book::Book;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Per-pipeline search results, keyed on the query exactly as typed.
///
/// Entries never expire and the cache is unbounded; it lives as long as the
/// owning pipeline. A later `set` for the same query replaces the entry.
#[derive(Debug, Default)]
pub struct SearchCache {
    entries: DashMap<String, Vec<Book>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &str) -> Option<Vec<Book>> {
        match self.entries.get(query) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Search cache hit for query: {}", query);
                Some(entry.value().clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn set(&self, query: &str, books: Vec<Book>) {
        debug!("Caching {} books for query: {}", books.len(), query);
        self.entries.insert(query.to_string(), books);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.entries.len(),
        }
    }
}
