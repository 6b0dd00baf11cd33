//! # Application configuration — `apollogs.toml`
//!
//! A small TOML document compiled into the web binary. It fixes the storage
//! namespace (and thus the concrete localStorage keys), the registration
//! password rule and the placeholder name for unnamed projects.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! namespace = "apollogs"   # prefix of every persisted key
//! version = 1              # bumped when the persisted layout changes
//!
//! [accounts]
//! min_password_len = 6
//!
//! [projects]
//! default_name = "Yeni Proje"
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is the default
//! configuration. [`TodoConfig::storage_keys`] turns the storage section into
//! the three keys used by [`crate::Accounts`] and [`crate::UserDataStore`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `apollogs.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
}

/// Where persisted state lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_version")]
    pub version: u32,
}

/// Registration rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountsConfig {
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

/// Project defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectsConfig {
    /// Name given to a project created with a blank name.
    #[serde(default = "default_project_name")]
    pub default_name: String,
}

fn default_namespace() -> String {
    "apollogs".to_string()
}

fn default_version() -> u32 {
    1
}

fn default_min_password_len() -> usize {
    6
}

fn default_project_name() -> String {
    "Yeni Proje".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            version: default_version(),
        }
    }
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            min_password_len: default_min_password_len(),
        }
    }
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            default_name: default_project_name(),
        }
    }
}

/// The concrete keys of the three persisted values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub accounts: String,
    pub session: String,
    pub user_data: String,
}

impl TodoConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "apollogs.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Keys are `<namespace>.<name>:v<version>`, e.g. `apollogs.users:v1`.
    pub fn storage_keys(&self) -> StorageKeys {
        let StorageConfig { namespace, version } = &self.storage;
        StorageKeys {
            accounts: format!("{namespace}.users:v{version}"),
            session: format!("{namespace}.session:v{version}"),
            user_data: format!("{namespace}.data:v{version}"),
        }
    }
}
