//! # forma-config
//!
//! Layered configuration loading for Forma using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FORMA_*` prefix, `__` as separator)
//! 2. Project-level `.forma/config.toml`
//! 3. User-level `~/.config/forma/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FORMA_DATABASE__PATH` -> `database.path`,
//! `FORMA_REGISTRATION__TYPES` -> `registration.types`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use forma_config::FormaConfig;
//!
//! let config = FormaConfig::load_with_dotenv().expect("config");
//!
//! if config.registration.enabled {
//!     println!("registering {:?}", config.registration.types);
//! }
//! ```

mod database;
mod error;
mod general;
mod registration;

pub use database::{DEFAULT_DB_PATH, DatabaseConfig};
pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use registration::{DEFAULT_TYPES, RegistrationConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".forma/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormaConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FormaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or the merged
    /// configuration is inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FORMA_").split("__"))
    }

    /// Reject values that would only fail later, at connection or output time.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` for an unknown output format or a blank
    /// local path, `ConfigError::NotConfigured` when a remote URL is given
    /// without an auth token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !OUTPUT_FORMATS.contains(&self.general.default_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "expected one of {}, got '{}'",
                    OUTPUT_FORMATS.join(", "),
                    self.general.default_format
                ),
            });
        }
        if self.database.url.is_empty() && self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be blank".into(),
            });
        }
        if !self.database.url.is_empty() && self.database.auth_token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("forma").join("config.toml"))
    }

    /// Load `.env` from the current directory. Missing files are ignored.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
