use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_book_id(id: &str) -> Result<(), AppError> {
        if id.trim().is_empty() {
            return Err(AppError::InvalidInput("Book ID was not provided".to_string()));
        }
        Ok(())
    }

    pub fn validate_book_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 1000 {
            return Err(AppError::ValidationError(
                "Title too long (max 1000 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.len() > 500 {
            return Err(AppError::ValidationError(
                "Search query too long (max 500 characters)".to_string(),
            ));
        }
        Ok(())
    }
}
