//! KeyValueStore trait and error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a durable slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key cannot be mapped to a storage slot.
    #[error("invalid storage key '{key}': use letters, digits, '-', '_' or '.'")]
    InvalidKey { key: String },

    /// The storage root exists but is not a directory.
    #[error("storage root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the temporary file into place failed.
    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A string-valued key-value store addressed by slot name.
///
/// Mirrors the browser `localStorage` contract: values are opaque strings and
/// a missing key reads as `None` rather than an error.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// Returns true if `key` can be used as a storage slot name.
///
/// Keys double as file names for [`FileStore`](super::FileStore), so they are
/// restricted to a portable character set and may not start with a dot.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
