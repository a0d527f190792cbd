pub mod google_books;
pub mod open_library;

pub use google_books::GoogleBooksAdapter;
pub use open_library::OpenLibraryAdapter;
