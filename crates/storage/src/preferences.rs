//! Preference persistence surface
//!
//! The theme layer persists small string values (the selected theme mode)
//! through [`PreferenceStore`]. Failures are reported, never panicked on;
//! callers decide whether to fall back.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::kv::{KvError, KvStore, Result};

/// Host key-value storage for preferences
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl PreferenceStore for KvStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, &value)
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KvError::InvalidKey(String::new()));
        }
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store that rejects every operation
///
/// Stands in for hosts where storage is denied (private browsing, sandboxed
/// shells).
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(KvError::Unavailable("no host storage".to_string()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Err(KvError::Unavailable("no host storage".to_string()))
    }
}
