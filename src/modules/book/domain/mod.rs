pub mod book;
pub mod reading_status;

pub use book::{Book, PLACEHOLDER_COVER, UNKNOWN_AUTHOR};
pub use reading_status::ReadingStatus;
