// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

pub use isdr_access::test_support::*;

/// Install env_logger once so `RUST_LOG=trace cargo test` shows the
/// exchange log.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
