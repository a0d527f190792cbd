use log::{debug, error, info};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Install env_logger once. `RUST_LOG` still overrides these levels.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .filter_module("bookshelf", log::LevelFilter::Debug)
            .filter_module("bookshelf_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        debug!("Logger ready");
    });
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

/// One-line log formats shared by the catalog, store and import paths
pub struct LogContext;

impl LogContext {
    /// `duration_ms` is `None` when the request is about to be sent
    pub fn store_operation(operation: &str, table: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(ms) => info!("Store: {} on '{}' took {}ms", operation, table, ms),
            None => debug!("Store: {} on '{}'", operation, table),
        }
    }

    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(ms) => info!("{} {} answered {} in {}ms", provider, endpoint, status, ms),
            None => debug!("{} {} {}", status, provider, endpoint),
        }
    }

    pub fn import_progress(current: usize, total: usize, title: &str) {
        info!("Import {}/{}: '{}'", current, total, title);
    }

    /// Without `results` the search is starting; without `provider` it is
    /// the merged answer.
    pub fn search_operation(query: &str, provider: Option<&str>, results: Option<usize>) {
        let source = provider.unwrap_or("all providers");
        match results {
            Some(count) => info!("Search '{}' via {}: {} books", query, source, count),
            None => debug!("Search '{}' via {} started", query, source),
        }
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}

/// Wall-clock timer for a named operation
pub struct TimedOperation {
    started: Instant,
    label: String,
}

impl TimedOperation {
    pub fn new(label: &str) -> Self {
        debug!("{} started", label);
        Self {
            started: Instant::now(),
            label: label.to_string(),
        }
    }

    /// Log the elapsed time with a short summary and return it in ms
    pub fn finish_with_info(self, summary: &str) -> u64 {
        let elapsed = self.started.elapsed().as_millis() as u64;
        info!("{} took {}ms ({})", self.label, elapsed, summary);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger();
        init_logger();
    }

    #[test]
    fn test_timed_operation_reports_elapsed_ms() {
        let timer = TimedOperation::new("unit");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.finish_with_info("done") >= 5);
    }
}
