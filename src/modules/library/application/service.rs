use super::export::{export_books, parse_import};
use crate::modules::book::{Book, ReadingStatus};
use crate::modules::library::domain::{BookRepository, LibrarySort, ReadingStatistics};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::utils::Validator;
use crate::{log_debug, log_warn};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct LibraryService {
    repository: Arc<dyn BookRepository>,
}

impl LibraryService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    pub async fn save_book(&self, book: Book) -> AppResult<Book> {
        Validator::validate_book_id(&book.id)?;
        Validator::validate_book_title(&book.title)?;

        self.repository.upsert(&book).await?;
        log_debug!("Saved '{}' ({}) to the library", book.title, book.id);
        Ok(book)
    }

    /// Completing a book without a date stamps it with the current time.
    pub async fn update_status(
        &self,
        id: &str,
        status: ReadingStatus,
        completion_date: Option<DateTime<Utc>>,
    ) -> AppResult<Book> {
        Validator::validate_book_id(id)?;

        let mut book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))?;

        let completion_date = match status {
            ReadingStatus::Completed => completion_date.or_else(|| Some(Utc::now())),
            ReadingStatus::ToRead | ReadingStatus::Reading => None,
        };
        book.set_status(status, completion_date);

        self.repository.upsert(&book).await?;
        Ok(book)
    }

    pub async fn remove_book(&self, id: &str) -> AppResult<()> {
        Validator::validate_book_id(id)?;
        self.repository.delete(id).await
    }

    pub async fn list_books(&self, sort: LibrarySort) -> AppResult<Vec<Book>> {
        let mut books = self.repository.find_all().await?;
        sort.apply(&mut books);
        Ok(books)
    }

    pub async fn statistics(&self) -> AppResult<ReadingStatistics> {
        let books = self.repository.find_all().await?;
        Ok(ReadingStatistics::from_books(&books))
    }

    pub async fn export_json(&self) -> AppResult<String> {
        let books = self.repository.find_all().await?;
        export_books(&books)
    }

    /// Import an exported library; returns how many books were written.
    ///
    /// The payload is fully validated first, so a malformed file writes
    /// nothing.
    pub async fn import_json(&self, payload: &str) -> AppResult<usize> {
        let books = parse_import(payload).map_err(|e| {
            log_warn!("Library import rejected: {}", e);
            e
        })?;

        let timer = TimedOperation::new("library import");
        let total = books.len();
        for (index, book) in books.iter().enumerate() {
            LogContext::import_progress(index + 1, total, &book.title);
            if let Err(e) = self.repository.upsert(book).await {
                LogContext::error_with_context(&e, &format!("Import stopped at '{}'", book.title));
                return Err(e);
            }
        }
        timer.finish_with_info(&format!("{} books", total));

        Ok(total)
    }
}
