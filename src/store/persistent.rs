//! A typed value mirrored into a named key-value slot.

use super::kv::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Binds an in-memory value to a durable slot.
///
/// The value is read once when the binding is created and written back in
/// full after every change. Storage is best effort: failures are logged and
/// the in-memory value stays authoritative, so callers never see an error.
///
/// # Examples
///
/// ```
/// use jot::store::{MemoryStore, Persistent};
///
/// let mut counter = Persistent::load(MemoryStore::new(), "counter", 0u32);
/// counter.update(|n| n + 1);
/// assert_eq!(*counter.get(), 1);
/// assert_eq!(counter.store().raw("counter"), Some("1"));
/// ```
#[derive(Debug)]
pub struct Persistent<T, S> {
    key: String,
    value: T,
    store: S,
}

impl<T, S> Persistent<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    /// Loads the value stored under `key`, or uses `fallback`.
    ///
    /// `fallback` is used when the slot is empty, when the store cannot be
    /// read, and when the stored text does not deserialize as `T`. Nothing is
    /// written back until the first `set` or `update`.
    pub fn load(store: S, key: impl Into<String>, fallback: T) -> Self {
        let key = key.into();

        let value = match store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => {
                    debug!(key = %key, "loaded stored value");
                    value
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "stored value is unreadable, using default");
                    fallback
                }
            },
            Ok(None) => {
                debug!(key = %key, "no stored value, using default");
                fallback
            }
            Err(e) => {
                warn!(key = %key, error = %e, "storage unavailable, using default");
                fallback
            }
        };

        Self { key, value, store }
    }

    /// Replaces the value and writes it to the store.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Replaces the value with `f(current)` and writes it to the store.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Mutates the value in place and writes it to the store.
    pub fn modify(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.persist();
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize value, keeping it in memory only");
                return;
            }
        };

        match self.store.set(&self.key, &raw) {
            Ok(()) => debug!(key = %self.key, bytes = raw.len(), "stored value"),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to store value, keeping it in memory only")
            }
        }
    }
}

impl<T, S> Persistent<T, S> {
    /// Returns the current in-memory value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the slot name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the binding, returning the value and the store.
    pub fn into_parts(self) -> (T, S) {
        (self.value, self.store)
    }
}
