//! Humanize Integration Tests
//!
//! Cross-crate tests over the public API of `humanize-core` and the
//! `humanize-render` stream, driven by the golden table in [`fixtures`].
//!
//! Run with: cargo test --package humanize-integration-tests

pub mod fixtures;

pub use fixtures::*;
