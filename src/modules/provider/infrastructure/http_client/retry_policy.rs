//! Throttling and retry settings for the per-provider request queues

use std::time::Duration;

/// Configuration for queue pacing and retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct QueueConfig {
    /// Generic retries granted to each task before its error is returned
    pub max_retries: u32,
    /// Pause after a task settles, before the next one is started
    pub inter_request_delay: Duration,
    /// Pause after a failed task was pushed back to the tail
    pub retry_delay: Duration,
    /// Pause before re-running a task that hit HTTP 429
    pub rate_limit_delay: Duration,
    /// Rate-limit re-runs allowed for a single task
    pub max_rate_limit_retries: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            inter_request_delay: Duration::from_millis(1000),
            retry_delay: Duration::from_millis(2000),
            rate_limit_delay: Duration::from_millis(3000),
            max_rate_limit_retries: 5,
        }
    }
}

impl QueueConfig {
    /// Google Books enforces a per-user quota, so back off harder on 429
    pub fn google_books() -> Self {
        Self {
            rate_limit_delay: Duration::from_millis(5000),
            ..Self::default()
        }
    }

    /// Open Library asks clients to keep to about one request per second
    pub fn open_library() -> Self {
        Self::default()
    }

    /// No pacing at all, for tests and local fixtures
    pub fn immediate() -> Self {
        Self {
            inter_request_delay: Duration::ZERO,
            retry_delay: Duration::ZERO,
            rate_limit_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_max_rate_limit_retries(mut self, max_rate_limit_retries: u32) -> Self {
        self.max_rate_limit_retries = max_rate_limit_retries;
        self
    }
}
