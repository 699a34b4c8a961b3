//! # crux-config
//!
//! Layered configuration loading for crux using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CRUX_*` prefix, `__` as separator)
//! 2. Project-level `.crux/config.toml`
//! 3. User-level `~/.config/crux/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `CRUX_PARSER__MAX_DEPTH` -> `parser.max_depth`,
//! `CRUX_OUTPUT__PRETTY` -> `output.pretty`.
//!
//! ```no_run
//! use crux_config::CruxConfig;
//!
//! let config = CruxConfig::load_with_dotenv().expect("config");
//! let options = config.parser.to_options();
//! ```

mod error;
mod output;
mod parser;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use parser::{BackendKind, ParserConfig};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".crux/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CruxConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl CruxConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    /// [`ConfigError::Figment`] if a source is malformed, or
    /// [`ConfigError::InvalidValue`] if the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// [`Self::load`] after loading `.env` from the working directory.
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load with an explicit TOML file layered above the project file.
    ///
    /// Environment variables still win.
    ///
    /// # Errors
    /// See [`Self::load`]. A missing `path` is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file not found: {}", path.display()),
            });
        }
        let figment = Self::file_layers()
            .merge(Toml::file(path))
            .merge(Self::env_layer());
        Self::extract(figment)
    }

    /// The full provider chain, public so tests can layer more providers.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_layers().merge(Self::env_layer())
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("crux").join("config.toml"))
    }

    fn file_layers() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }
        figment
    }

    fn env_layer() -> Env {
        Env::prefixed("CRUX_").split("__")
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.parser.validate()?;
        Ok(config)
    }
}
