//! # Key-value store adapter
//!
//! [`KeyValueStore`] is the only thing the registry and the user data store
//! know about persistence: string keys, string values, the same contract as
//! `window.localStorage`. Implementations live in sibling modules
//! ([`crate::MemoryStore`], [`crate::FileStore`] and, in the browser,
//! `LocalStorageStore`).
//!
//! The provided [`load`](KeyValueStore::load) and [`save`](KeyValueStore::save)
//! add JSON on top. Reads never fail: a missing key or a value that does not
//! parse yields the caller's default. Writes overwrite the whole value and
//! report backend failures as [`StoreError`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Parse the JSON stored at `key`, or return `default`.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        let Some(raw) = self.get_item(key) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding malformed stored value");
                default
            }
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set_item(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_missing_key_yields_default() {
        let store = MemoryStore::new();
        let value: Vec<String> = store.load("nothing", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_malformed_value_yields_default() {
        let store = MemoryStore::new();
        store.set_item("broken", "{not json").unwrap();
        let value: Vec<u32> = store.load("broken", Vec::new());
        assert!(value.is_empty());

        // Valid JSON of the wrong shape is treated the same way.
        store.set_item("wrong", r#"{"a":1}"#).unwrap();
        let value: Vec<u32> = store.load("wrong", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        store.save("n", &1u32).unwrap();
        store.save("n", &2u32).unwrap();
        assert_eq!(store.get_item("n").as_deref(), Some("2"));
        assert_eq!(store.load("n", 0u32), 2);
    }

    #[test]
    fn test_null_reads_as_none() {
        let store = MemoryStore::new();
        store.save("session", &Option::<String>::None).unwrap();
        assert_eq!(store.get_item("session").as_deref(), Some("null"));
        let value: Option<String> = store.load("session", Some("x".to_string()));
        assert_eq!(value, None);
    }
}
