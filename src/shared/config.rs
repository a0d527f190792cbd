//! Application configuration loaded from the environment (and `.env`).

use crate::modules::provider::infrastructure::http_client::QueueConfig;
use crate::modules::provider::infrastructure::pagination::PaginationConfig;
use crate::shared::errors::{AppError, AppResult};
use std::time::Duration;

pub const DEFAULT_GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1";
pub const DEFAULT_OPEN_LIBRARY_URL: &str = "https://openlibrary.org";
pub const DEFAULT_TRANSLATION_TARGET: &str = "fr";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct GoogleBooksConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct TranslationConfig {
    pub url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` disables the Google Books pipeline
    pub google_books: Option<GoogleBooksConfig>,
    pub open_library_base_url: String,
    /// `None` falls back to the in-memory session store
    pub supabase: Option<SupabaseConfig>,
    /// `None` leaves descriptions untranslated
    pub translation: Option<TranslationConfig>,
    pub target_language: String,
    pub http_timeout: Duration,
    pub exclude_technical_results: bool,
    pub open_library_queue: QueueConfig,
    pub google_books_queue: QueueConfig,
    pub pagination: PaginationConfig,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let google_books = match non_empty("GOOGLE_BOOKS_API_KEY") {
            Some(api_key) => Some(GoogleBooksConfig {
                api_key,
                base_url: non_empty("GOOGLE_BOOKS_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GOOGLE_BOOKS_URL.to_string()),
            }),
            None => {
                log::warn!("GOOGLE_BOOKS_API_KEY not set, Google Books search disabled");
                None
            }
        };

        let supabase = match (non_empty("SUPABASE_URL"), non_empty("SUPABASE_KEY")) {
            (Some(url), Some(key)) => Some(SupabaseConfig {
                url: url.trim_end_matches('/').to_string(),
                key,
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::ConfigError(
                    "SUPABASE_URL and SUPABASE_KEY must be set together".to_string(),
                ))
            }
        };

        let translation = non_empty("TRANSLATION_URL").map(|url| TranslationConfig {
            url: url.trim_end_matches('/').to_string(),
            api_key: non_empty("TRANSLATION_API_KEY"),
        });

        let http_timeout = match non_empty("HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("Invalid HTTP_TIMEOUT_SECS '{}': {}", raw, e))
            })?),
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let exclude_technical_results = non_empty("EXCLUDE_TECHNICAL_RESULTS")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            google_books,
            open_library_base_url: non_empty("OPEN_LIBRARY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPEN_LIBRARY_URL.to_string()),
            supabase,
            translation,
            target_language: non_empty("TRANSLATION_TARGET")
                .unwrap_or_else(|| DEFAULT_TRANSLATION_TARGET.to_string()),
            http_timeout,
            exclude_technical_results,
            open_library_queue: QueueConfig::open_library(),
            google_books_queue: QueueConfig::google_books(),
            pagination: PaginationConfig::default(),
        })
    }
}
