// common/mod.rs - Shared test utilities
//
// Log capture for tests that want to see the tracing output of the search
// flow, plus small helpers for asserting on result lists.

#![allow(dead_code)]

use std::sync::Once;

use buena_leida_web::web_app::model::Book;

static LOGGING: Once = Once::new();

/// Routes tracing output through the test harness writer.
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Titles in result order
pub fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}
