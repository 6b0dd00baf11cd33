use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for tests and as a stand-in when no storage exists.
///
/// Clones share the same map, so a second [`crate::Accounts`] built from a
/// clone sees exactly what a page reload would.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        let other = store.clone();
        other.set_item("k", "v").unwrap();

        assert_eq!(store.get_item("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);
    }
}
