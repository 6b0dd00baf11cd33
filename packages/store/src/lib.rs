pub mod accounts;
pub mod config;
pub mod error;
pub mod hash;
pub mod ids;
pub mod kv;
pub mod models;
pub mod user_data;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use accounts::Accounts;
pub use config::{StorageKeys, TodoConfig};
pub use error::{AuthError, Error, StoreError, ValidationError};
pub use hash::identity_hash;
pub use kv::KeyValueStore;
pub use models::{Account, NewTask, Priority, Project, Session, Task, TaskPatch, UserData};
pub use user_data::UserDataStore;
