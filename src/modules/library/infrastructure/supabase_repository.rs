//! Hosted row store reached through its PostgREST endpoint
//!
//! Table `books`: `id` (primary key), `book_data` (full book JSON), `status`,
//! `completion_date` and a store-assigned `created_at`.

use crate::modules::book::{Book, ReadingStatus};
use crate::modules::library::domain::BookRepository;
use crate::shared::config::SupabaseConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const TABLE: &str = "books";

#[derive(Debug, Serialize)]
struct BookRow<'a> {
    id: &'a str,
    book_data: &'a Book,
    status: ReadingStatus,
    completion_date: Option<DateTime<Utc>>,
}

impl<'a> From<&'a Book> for BookRow<'a> {
    fn from(book: &'a Book) -> Self {
        Self {
            id: &book.id,
            book_data: book,
            status: book.status,
            completion_date: book.completion_date,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BookDataRow {
    book_data: Book,
}

pub struct SupabaseBookRepository {
    client: Client,
    table_url: String,
    api_key: String,
}

impl SupabaseBookRepository {
    pub fn new(config: &SupabaseConfig, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build store client: {}", e)))?;

        Ok(Self {
            client,
            table_url: format!("{}/rest/v1/{}", config.url.trim_end_matches('/'), TABLE),
            api_key: config.key.clone(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn id_filter(id: &str) -> String {
        format!("eq.{}", id)
    }

    async fn execute(&self, operation: &str, request: RequestBuilder) -> AppResult<Response> {
        let started = Instant::now();
        LogContext::store_operation(operation, TABLE, None);

        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| AppError::DatabaseError(format!("{} on {} failed: {}", operation, TABLE, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::DatabaseError(format!(
                "{} on {} returned {}: {}",
                operation, TABLE, status, body
            )));
        }

        LogContext::store_operation(operation, TABLE, Some(started.elapsed().as_millis() as u64));
        Ok(response)
    }

    async fn read_rows(&self, response: Response) -> AppResult<Vec<Book>> {
        let rows: Vec<BookDataRow> = response
            .json()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Unreadable rows from {}: {}", TABLE, e)))?;
        Ok(rows.into_iter().map(|row| row.book_data).collect())
    }
}

#[async_trait]
impl BookRepository for SupabaseBookRepository {
    async fn upsert(&self, book: &Book) -> AppResult<()> {
        let request = self
            .client
            .post(&self.table_url)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&BookRow::from(book));

        self.execute("upsert", request).await?;
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let request = self
            .client
            .get(&self.table_url)
            .query(&[("select", "book_data"), ("order", "created_at.desc")]);

        let response = self.execute("select", request).await?;
        self.read_rows(response).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let request = self.client.get(&self.table_url).query(&[
            ("select", "book_data".to_string()),
            ("id", Self::id_filter(id)),
            ("limit", "1".to_string()),
        ]);

        let response = self.execute("select", request).await?;
        Ok(self.read_rows(response).await?.into_iter().next())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let request = self
            .client
            .delete(&self.table_url)
            .query(&[("id", Self::id_filter(id))]);

        self.execute("delete", request).await?;
        Ok(())
    }
}
