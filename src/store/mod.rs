//! Durable key-value storage and the persistent value binding

mod file;
mod kv;
mod memory;
mod persistent;

pub use file::FileStore;
pub use kv::{KeyValueStore, StoreError, StoreResult, is_valid_key};
pub use memory::{DetachedStore, MemoryStore};
pub use persistent::Persistent;
