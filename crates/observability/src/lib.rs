//! Tracing/logging setup shared by every storefront process.

/// Tracing subscriber installation.
pub mod tracing;

pub use self::tracing::{init, init_for_tests, init_with_default_filter};
