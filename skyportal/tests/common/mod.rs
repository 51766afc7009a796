// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

pub use skyportal::test_support::*;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
