use std::collections::HashMap;
use std::sync::Mutex;

use crate::StoreResult;

/// Injectable storage handle: a synchronous text key-value namespace.
///
/// Every persisted collection lives under one fixed key as a serialized
/// string. `get` on an absent key is `Ok(None)`, never an error. The trait
/// is object-safe so repositories can share one handle behind `Arc`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn put(&self, key: &str, value: String) -> StoreResult<()>;
}

/// Volatile backend for tests and short-lived embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
