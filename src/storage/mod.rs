// SPDX-License-Identifier: MPL-2.0
//! Persistence backends for the selected locale.
//!
//! The store only needs a synchronous string key/value capability. Two
//! backends are provided:
//!
//! - [`MemoryStore`] - process-local, used by tests and embedders that
//!   persist elsewhere
//! - [`FileStore`] - a flat `settings.toml` in the config directory

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// String-keyed, string-valued persistence.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
