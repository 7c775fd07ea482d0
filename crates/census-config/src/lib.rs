//! # census-config
//!
//! Layered configuration loading for optimade-census using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CENSUS_*` prefix, `__` as separator)
//! 2. Project-level `census.toml` (or the file passed with `--config`)
//! 3. User-level `~/.config/optimade-census/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `CENSUS_PROBE__BATCH_SIZE` -> `probe.batch_size`,
//! `CENSUS_OUTPUT__PTABLE_PATH` -> `output.ptable_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use census_config::CensusConfig;
//!
//! let config = CensusConfig::load_with_dotenv(None).expect("config");
//! println!("batch size: {}", config.probe.batch_size);
//! ```

mod error;
mod http;
mod output;
mod probe;
mod registry;

pub use error::ConfigError;
pub use http::HttpConfig;
pub use output::OutputConfig;
pub use probe::ProbeConfig;
pub use registry::{DEFAULT_PROVIDERS_URL, RegistryConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "census.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CensusConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl CensusConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `project_file` replaces the default `census.toml` lookup when given.
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `project_file` does not exist, a source
    /// cannot be parsed, or a value fails validation.
    pub fn load(project_file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = project_file
            && !path.exists()
        {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        let config: Self = Self::figment(project_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(project_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(project_file)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(project_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        match project_file {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CENSUS_").split("__"))
    }

    /// Reject values the prober and driver cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe.batch_size == 0 {
            return Err(invalid("probe.batch_size", "must be at least 1"));
        }
        if self.probe.max_concurrent_providers == 0 {
            return Err(invalid("probe.max_concurrent_providers", "must be at least 1"));
        }
        if self.registry.providers_url.trim().is_empty() {
            return Err(invalid("registry.providers_url", "must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("optimade-census").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
