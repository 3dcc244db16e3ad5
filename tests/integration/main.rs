//! Integration tests for robots.txt parsing and matching
//!
//! These tests run the parser over real-world robots.txt files and check
//! robustness properties over arbitrary input.

mod properties;

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a test subscriber so parser events show up with `RUST_LOG`
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
