pub mod book_provider;

pub use book_provider::BookProvider;
