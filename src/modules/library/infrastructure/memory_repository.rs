use crate::modules::book::Book;
use crate::modules::library::domain::BookRepository;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Session-only store, kept in insertion order
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn upsert(&self, book: &Book) -> AppResult<()> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|existing| existing.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.books.write().await.retain(|book| book.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let repo = InMemoryBookRepository::new();
        repo.upsert(&Book::new("1", "La Peste")).await.unwrap();
        repo.upsert(&Book::new("2", "La Chute")).await.unwrap();
        repo.upsert(&Book::new("1", "La Peste (Folio)")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "2");
        assert_eq!(all[1].title, "La Peste (Folio)");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryBookRepository::new();
        repo.upsert(&Book::new("1", "Noces")).await.unwrap();
        repo.delete("1").await.unwrap();
        repo.delete("missing").await.unwrap();
        assert!(repo.find_by_id("1").await.unwrap().is_none());
    }
}
