use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported book catalog providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BookProvider {
    /// Open Library search API (provider A, keyless)
    #[serde(rename = "open_library")]
    OpenLibrary,
    /// Google Books volumes API (provider B, API key)
    #[serde(rename = "google_books")]
    GoogleBooks,
}

impl BookProvider {
    /// Human readable name used in logs and error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            BookProvider::OpenLibrary => "Open Library",
            BookProvider::GoogleBooks => "Google Books",
        }
    }
}

impl fmt::Display for BookProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookProvider::OpenLibrary => "open_library",
            BookProvider::GoogleBooks => "google_books",
        };
        write!(f, "{}", name)
    }
}
