use crate::modules::book::Book;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistent store for the user's saved books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert or replace the row keyed by `book.id`
    async fn upsert(&self, book: &Book) -> AppResult<()>;
    /// All saved books, most recently created first
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}
