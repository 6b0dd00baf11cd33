//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used by native builds, where there is
//! no `localStorage`. Each key becomes one JSON file under a base directory:
//!
//! ```text
//! <base_dir>/
//! ├── apollogs.users_v1.json
//! ├── apollogs.session_v1.json
//! └── apollogs.data_v1.json
//! ```
//!
//! `:` is not allowed in Windows file names, so it is replaced by `_`.
//! Use `dirs::data_dir()` joined with `apollogs` for a platform-appropriate base.

use std::path::PathBuf;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| match c {
                ':' | '/' | '\\' => '_',
                c => c,
            })
            .collect();
        self.base.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("apollogs");

        let store = FileStore::new(base.clone());
        assert!(store.get_item("apollogs.session:v1").is_none());
        store
            .save(
                "apollogs.session:v1",
                &Some(Session {
                    email: "a@b.co".to_string(),
                }),
            )
            .unwrap();

        assert!(base.join("apollogs.session_v1.json").exists());

        // Re-open from same directory
        let reopened = FileStore::new(base);
        let session: Option<Session> = reopened.load("apollogs.session:v1", None);
        assert_eq!(session.unwrap().email, "a@b.co");
    }
}
