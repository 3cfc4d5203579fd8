//! # tonal-config
//!
//! Layered configuration loading for Tonal using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. `TWITTER_BEARER_TOKEN` (mapped to `twitter.bearer_token`)
//! 2. Environment variables (`TONAL_*` prefix, `__` as separator)
//! 3. An explicit config file (`--config`), or project-level `.tonal/config.toml`
//! 4. User-level `~/.config/tonal/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TONAL_TWITTER__API_URL` -> `twitter.api_url`,
//! `TONAL_TWITTER__TIMELINE_PAGE_SIZE` -> `twitter.timeline_page_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tonal_config::TonalConfig;
//!
//! let config = TonalConfig::load().expect("config");
//! let token = config.twitter.require_token().expect("token");
//! ```

mod error;
mod twitter;

pub use error::ConfigError;
pub use twitter::{
    BEARER_TOKEN_ENV, MAX_FOLLOWING_PAGE_SIZE, MAX_TIMELINE_PAGE_SIZE, MIN_TIMELINE_PAGE_SIZE,
    TwitterConfig,
};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
const PROJECT_CONFIG: &str = ".tonal/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TonalConfig {
    #[serde(default)]
    pub twitter: TwitterConfig,
}

impl TonalConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does not read `.env` files; the binary loads those before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type, and [`ConfigError::InvalidValue`] if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration using `path` in place of the project-level file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist, otherwise
    /// see [`Self::load`].
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Self::extract(Self::figment_with(Some(path)))
    }

    /// Build the default figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the provider chain, using `config_file` instead of `.tonal/config.toml`
    /// when given.
    #[must_use]
    pub fn figment_with(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Explicit or project-local config
        match config_file {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(PROJECT_CONFIG);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Prefixed environment variables
        figment = figment.merge(Env::prefixed("TONAL_").split("__"));

        // Layer 4: The conventional credential variable
        figment.merge(
            Env::raw()
                .only(&[BEARER_TOKEN_ENV])
                .map(|_| "twitter.bearer_token".into()),
        )
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.twitter.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tonal").join("config.toml"))
    }
}
