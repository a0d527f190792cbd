pub mod memory_repository;
pub mod supabase_repository;

pub use memory_repository::InMemoryBookRepository;
pub use supabase_repository::SupabaseBookRepository;
