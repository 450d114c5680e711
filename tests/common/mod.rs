//! Shared utilities for integration tests.

pub mod harness;

use jot::domain::Note;

/// Parses a stored notes collection.
///
/// # Panics
///
/// Panics if the text is not a valid collection.
#[allow(dead_code)]
pub fn parse_collection(raw: &str) -> Vec<Note> {
    serde_json::from_str(raw).unwrap_or_else(|e| panic!("Failed to parse collection: {}", e))
}
