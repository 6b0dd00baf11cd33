//! Shared store constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] the app persists into:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native**: JSON files via [`store::FileStore`] under `<data_dir>/apollogs/`
//! - **WASM without `web`**: an in-memory [`store::MemoryStore`] (nothing survives a reload)

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
pub type AppStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStore = store::MemoryStore;

/// Create the platform-appropriate store.
pub fn make_store() -> AppStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("apollogs");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
