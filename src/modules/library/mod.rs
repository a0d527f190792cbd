pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

pub use application::LibraryService;
pub use domain::{BookRepository, LibrarySort, ReadingStatistics};
