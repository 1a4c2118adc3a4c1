//! Document store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default local database path, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = ".forma/forma.db";

fn default_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local libSQL database file.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://forma.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a remote database should be used instead of the local file.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    #[must_use]
    pub fn local_path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}
