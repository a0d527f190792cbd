use crate::modules::book::{Book, ReadingStatus};
use crate::modules::library::{LibrarySort, ReadingStatistics};
use crate::shared::errors::AppResult;
use crate::AppState;
use chrono::{DateTime, Utc};

pub async fn save_book(state: &AppState, book: Book) -> AppResult<Book> {
    state.library_service.save_book(book).await
}

pub async fn list_library(state: &AppState, sort: Option<LibrarySort>) -> AppResult<Vec<Book>> {
    state
        .library_service
        .list_books(sort.unwrap_or_default())
        .await
}

pub async fn update_reading_status(
    state: &AppState,
    book_id: String,
    status: ReadingStatus,
    completion_date: Option<DateTime<Utc>>,
) -> AppResult<Book> {
    state
        .library_service
        .update_status(&book_id, status, completion_date)
        .await
}

pub async fn delete_book(state: &AppState, book_id: String) -> AppResult<()> {
    state.library_service.remove_book(&book_id).await
}

pub async fn reading_statistics(state: &AppState) -> AppResult<ReadingStatistics> {
    state.library_service.statistics().await
}

pub async fn export_library(state: &AppState) -> AppResult<String> {
    state.library_service.export_json().await
}

/// Returns the number of imported books
pub async fn import_library(state: &AppState, payload: String) -> AppResult<usize> {
    state.library_service.import_json(&payload).await
}
