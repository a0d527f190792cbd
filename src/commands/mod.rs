pub mod registry;

pub use registry::{dispatch, usage, COMMANDS};
