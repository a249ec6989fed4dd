//! # cov-config
//!
//! Layered configuration loading for Covenant using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COVENANT_*` prefix, `__` as separator)
//! 2. Project-level `.covenant/config.toml`
//! 3. User-level `~/.config/covenant/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `COVENANT_BRIEF__RECENT_WINDOW_DAYS` -> `brief.recent_window_days`,
//! `COVENANT_ACCESS__ASSET_MANAGER_PROPERTY_IDS` -> `access.asset_manager_property_ids`.
//!
//! ```no_run
//! use cov_config::CovConfig;
//!
//! let config = CovConfig::load_with_dotenv().expect("config");
//! println!("window: {} days", config.brief.recent_window_days);
//! ```

mod access;
mod brief;
mod error;
mod grounding;

pub use access::AccessConfig;
pub use brief::BriefConfig;
pub use error::ConfigError;
pub use grounding::GroundingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".covenant/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CovConfig {
    #[serde(default)]
    pub grounding: GroundingConfig,
    #[serde(default)]
    pub brief: BriefConfig,
    #[serde(default)]
    pub access: AccessConfig,
}

impl CovConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`CovConfig::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading the nearest `.env` file.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("COVENANT_").split("__"))
    }

    /// Reject values that would make the validator or aggregator degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grounding.validate()?;
        self.brief.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("covenant").join("config.toml"))
    }

    /// Walk up from the working directory to the first `.env`. Missing is fine.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
