pub mod commands;
pub mod modules;
pub mod shared;

use modules::library::{
    infrastructure::{InMemoryBookRepository, SupabaseBookRepository},
    BookRepository, LibraryService,
};
use modules::provider::{
    infrastructure::{
        GoogleBooksAdapter, LibreTranslateTranslator, NoopTranslator, OpenLibraryAdapter,
    },
    BookCatalog, BookSearchPipeline, ResultNormalizer, SearchAggregator, Translator,
};
use shared::config::AppConfig;
use shared::errors::AppResult;
use shared::utils::logger::{init_logger, LogContext};
use std::sync::Arc;

/// Wired services shared by every command
pub struct AppState {
    pub config: AppConfig,
    pub search_aggregator: Arc<SearchAggregator>,
    pub library_service: Arc<LibraryService>,
}

impl AppState {
    pub fn initialize(config: AppConfig) -> AppResult<Self> {
        let translator: Arc<dyn Translator> = match &config.translation {
            Some(translation) => {
                log::info!("Translating descriptions via {}", translation.url);
                Arc::new(LibreTranslateTranslator::new(translation, config.http_timeout)?)
            }
            None => Arc::new(NoopTranslator),
        };
        let normalizer = Arc::new(ResultNormalizer::new(
            translator,
            config.target_language.clone(),
        ));

        // Open Library first: merge order decides which duplicate survives
        let mut pipelines = Vec::new();
        let open_library: Arc<dyn BookCatalog> = Arc::new(OpenLibraryAdapter::new(
            &config.open_library_base_url,
            config.http_timeout,
        )?);
        pipelines.push(Arc::new(BookSearchPipeline::new(
            open_library,
            Arc::clone(&normalizer),
            config.open_library_queue.clone(),
            config.pagination.clone(),
        )));

        if let Some(google_books) = &config.google_books {
            let catalog: Arc<dyn BookCatalog> =
                Arc::new(GoogleBooksAdapter::new(google_books, config.http_timeout)?);
            pipelines.push(Arc::new(BookSearchPipeline::new(
                catalog,
                Arc::clone(&normalizer),
                config.google_books_queue.clone(),
                config.pagination.clone(),
            )));
        }

        let search_aggregator = Arc::new(
            SearchAggregator::new(pipelines).with_technical_filter(config.exclude_technical_results),
        );

        let repository: Arc<dyn BookRepository> = match &config.supabase {
            Some(supabase) => Arc::new(SupabaseBookRepository::new(supabase, config.http_timeout)?),
            None => {
                log::warn!("SUPABASE_URL not set, library is kept in memory for this session");
                Arc::new(InMemoryBookRepository::new())
            }
        };
        let library_service = Arc::new(LibraryService::new(repository));

        Ok(Self {
            config,
            search_aggregator,
            library_service,
        })
    }
}

/// Entry point of the `bookshelf` binary. Returns the process exit code.
pub async fn run(args: Vec<String>) -> i32 {
    init_logger();

    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", commands::usage());
        return 2;
    };

    let state = match AppConfig::from_env().and_then(AppState::initialize) {
        Ok(state) => state,
        Err(e) => {
            LogContext::error_with_context(&e, "Startup failed");
            return 1;
        }
    };

    match commands::dispatch(&state, command, rest).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(e) => {
                LogContext::error_with_context(&e, "Could not render output");
                1
            }
        },
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}
