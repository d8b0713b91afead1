//! Key-value persistence for preferences.
//!
//! - [`PreferenceStore`]: The capability the manager writes through to
//! - [`MemoryStore`]: Process-local map, optionally failing every call
//! - [`FileStore`]: JSON object on disk that survives restarts

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// String-keyed, string-valued persistence.
pub trait PreferenceStore {
    /// Returns the stored value, or `None` when the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
