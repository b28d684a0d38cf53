//! Cross-layer integration tests for matchday
//!
//! Tests that verify report files flow from text to standings.

mod batches;
mod season;

use std::path::PathBuf;

/// Path to a report under `tests/data`.
pub fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
