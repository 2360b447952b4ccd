//! Store configuration, read from TOML and overridable from the environment.
//!
//! ```toml
//! backend = "file"
//! data_dir = "/var/lib/storefront"
//! quota = 5242880
//! log_filter = "storefront_db=debug"
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::error::StoreError;
use crate::logging;
use crate::medium::{FileMedium, InMemoryMedium, Medium};
use crate::store::Store;

pub const ENV_BACKEND: &str = "STOREFRONT_DB_BACKEND";
pub const ENV_DATA_DIR: &str = "STOREFRONT_DB_DIR";
pub const ENV_QUOTA: &str = "STOREFRONT_DB_QUOTA";
pub const ENV_LOG: &str = "STOREFRONT_DB_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
    #[error("the file backend needs a data_dir")]
    MissingDataDir,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub backend: Backend,
    pub data_dir: Option<PathBuf>,
    /// Upper bound on stored keys plus values, in UTF-16 code units.
    /// Only honoured by the memory backend.
    pub quota: Option<usize>,
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            data_dir: None,
            quota: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Defaults overridden by the `STOREFRONT_DB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup` (an environment-like source).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BACKEND) {
            self.backend = match value.to_ascii_lowercase().as_str() {
                "memory" => Backend::Memory,
                "file" => Backend::File,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_BACKEND,
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup(ENV_DATA_DIR) {
            self.data_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = lookup(ENV_QUOTA) {
            let quota = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_QUOTA,
                value: value.clone(),
            })?;
            self.quota = Some(quota);
        }
        if let Some(value) = lookup(ENV_LOG) {
            self.log_filter = value;
        }
        Ok(self)
    }

    /// Build the configured medium.
    pub fn medium(&self) -> Result<Box<dyn Medium>, ConfigError> {
        match self.backend {
            Backend::Memory => Ok(match self.quota {
                Some(quota) => Box::new(InMemoryMedium::with_quota(quota)),
                None => Box::new(InMemoryMedium::new()),
            }),
            Backend::File => {
                let dir = self.data_dir.as_ref().ok_or(ConfigError::MissingDataDir)?;
                Ok(Box::new(FileMedium::new(dir)))
            }
        }
    }

    /// Install the tracing subscriber with `log_filter` as the default
    /// directives. `RUST_LOG` still takes precedence when set.
    pub fn init_logging(&self) {
        logging::init_logging(&self.log_filter);
    }

    /// Open a store on the configured medium, initialising logging first.
    pub fn open(&self) -> Result<Store<Box<dyn Medium>>, ConfigError> {
        self.init_logging();
        let medium = self.medium()?;
        info!(backend = ?self.backend, "opening store");
        Ok(Store::open(medium)?)
    }
}
