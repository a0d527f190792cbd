use crate::modules::book::Book;
use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Orderings offered on the library view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibrarySort {
    /// Most recently completed first; books without a completion date last
    #[default]
    Recent,
    Author,
    Title,
}

impl LibrarySort {
    /// Stable sort, so ties keep the store order
    pub fn apply(&self, books: &mut [Book]) {
        match self {
            LibrarySort::Recent => books.sort_by(|a, b| {
                match (a.completion_date, b.completion_date) {
                    (Some(a), Some(b)) => b.cmp(&a),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }),
            LibrarySort::Author => books.sort_by_cached_key(|book| {
                book.primary_author().unwrap_or_default().to_lowercase()
            }),
            LibrarySort::Title => books.sort_by_cached_key(|book| book.title.to_lowercase()),
        }
    }
}

impl FromStr for LibrarySort {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "recent" => Ok(LibrarySort::Recent),
            "author" => Ok(LibrarySort::Author),
            "title" => Ok(LibrarySort::Title),
            other => Err(AppError::InvalidInput(format!(
                "Unknown sort '{}', expected recent, author or title",
                other
            ))),
        }
    }
}
