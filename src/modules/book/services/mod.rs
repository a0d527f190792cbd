pub mod deduplication;
pub mod filters;

pub use deduplication::remove_duplicate_books;
pub use filters::{
    filter_non_book_results, matches_language, retain_languages, FRENCH_LANGUAGE_CODES,
};
