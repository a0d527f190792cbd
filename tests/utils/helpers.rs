/// Pipeline and service builders shared by the integration tests
use super::fake_catalog::FakeCatalog;
use bookshelf_lib::modules::library::infrastructure::InMemoryBookRepository;
use bookshelf_lib::modules::library::LibraryService;
use bookshelf_lib::modules::provider::infrastructure::translation::NoopTranslator;
use bookshelf_lib::modules::provider::infrastructure::{PaginationConfig, QueueConfig};
use bookshelf_lib::modules::provider::{BookSearchPipeline, ResultNormalizer};
use std::sync::Arc;

pub fn normalizer() -> Arc<ResultNormalizer> {
    Arc::new(ResultNormalizer::new(Arc::new(NoopTranslator), "fr"))
}

/// Pipeline with no pacing at all
pub fn fast_pipeline(catalog: Arc<FakeCatalog>) -> BookSearchPipeline {
    pipeline_with(catalog, QueueConfig::immediate(), PaginationConfig::immediate())
}

pub fn pipeline_with(
    catalog: Arc<FakeCatalog>,
    queue: QueueConfig,
    pagination: PaginationConfig,
) -> BookSearchPipeline {
    BookSearchPipeline::new(catalog, normalizer(), queue, pagination)
}

pub fn in_memory_library() -> LibraryService {
    LibraryService::new(Arc::new(InMemoryBookRepository::new()))
}
