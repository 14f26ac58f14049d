//! Opaque key/value persistence for the entry snapshot.
//!
//! The entry collection is written wholesale under a single key. Backends
//! only need string get/set; serialization happens in the store layer.

pub mod memory;

pub use memory::MemoryStore;

use crate::errors::AppResult;

pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when never written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrite `key` with `value`.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}
