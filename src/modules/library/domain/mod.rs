pub mod library_sort;
pub mod repository;
pub mod statistics;

pub use library_sort::LibrarySort;
pub use repository::BookRepository;
pub use statistics::{MonthlyReading, ReadingStatistics};
