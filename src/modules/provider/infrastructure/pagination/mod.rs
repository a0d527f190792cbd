pub mod driver;

pub use driver::{PaginationConfig, PaginationDriver, PaginationOutcome};
