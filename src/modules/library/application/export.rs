use crate::modules::book::Book;
use crate::shared::errors::{AppError, AppResult};
use serde_json::Value;

pub const INVALID_IMPORT_FORMAT: &str = "Invalid file format: expected a JSON array of books";

/// Pretty-printed JSON array, same layout as earlier exports
pub fn export_books(books: &[Book]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(books)?)
}

/// Parse an exported library. Nothing is returned unless every element is a
/// valid book.
pub fn parse_import(payload: &str) -> AppResult<Vec<Book>> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| AppError::ValidationError(format!("{} ({})", INVALID_IMPORT_FORMAT, e)))?;

    let Value::Array(items) = value else {
        return Err(AppError::ValidationError(INVALID_IMPORT_FORMAT.to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let book: Book = serde_json::from_value(item).map_err(|e| {
                AppError::ValidationError(format!("Invalid book at position {}: {}", index + 1, e))
            })?;
            if book.id.trim().is_empty() || book.title.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Invalid book at position {}: id and title are required",
                    index + 1
                )));
            }
            Ok(book)
        })
        .collect()
}
