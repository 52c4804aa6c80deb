//! Configuration management for the identity service
//!
//! Settings come from built-in defaults, an optional `config.toml`, and
//! `IDENTITY__`-prefixed environment variables, in increasing precedence.
//! E.g. `IDENTITY__STORE__BACKEND=file` selects the file store.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_STORE_PATH: &str = "data/identities.db";

/// Complete service configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub store: StoreConfig,

    /// Insert the demo identities at startup if they are missing
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,

    /// Datafile location, used by the file backend only
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    File,
}

impl ServiceConfig {
    /// Load configuration from `config.toml` in the working directory with
    /// environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from the given file (which may be absent) with
    /// environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("store.backend", "memory")?
            .set_default("store.path", DEFAULT_STORE_PATH)?
            .set_default("seed_demo_data", true)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("IDENTITY").separator("__"))
            .build()?;

        let config: ServiceConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.backend == StoreBackend::File && self.store.path.trim().is_empty() {
            return Err(ConfigError::Message(
                "store.path cannot be empty for the file backend".into(),
            ));
        }
        Ok(())
    }

    /// Get the datafile location as PathBuf
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.store.path)
    }
}
