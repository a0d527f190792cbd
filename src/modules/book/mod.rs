pub mod domain;
pub mod services;

pub use domain::{Book, ReadingStatus};
