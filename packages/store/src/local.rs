//! # localStorage key-value store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It talks to `window.localStorage` through `web-sys`, so all state is scoped
//! to the page's origin and survives reloads.
//!
//! The `Storage` handle is looked up on every call, never cached.
//!
//! ## Error handling
//!
//! Reads swallow every failure (no window, storage disabled, security error)
//! and report the key as missing. Writes surface failures, most commonly
//! `QuotaExceededError`, as [`StoreError::Write`].

use crate::error::StoreError;
use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}
