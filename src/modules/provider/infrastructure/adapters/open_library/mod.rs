pub mod adapter;
pub mod mapper;
pub mod models;

pub use adapter::OpenLibraryAdapter;
