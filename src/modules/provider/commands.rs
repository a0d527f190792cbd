use crate::modules::book::Book;
use crate::shared::errors::AppResult;
use crate::AppState;

/// Search every configured provider for French-language books
pub async fn search_books(state: &AppState, query: String) -> AppResult<Vec<Book>> {
    Ok(state.search_aggregator.search(&query).await)
}
