//! # fit-config
//!
//! Layered configuration loading for fittable using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FITTABLE_*` prefix, `__` as separator)
//! 2. Project-level `.fittable/config.toml`
//! 3. User-level `~/.config/fittable/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FITTABLE_DISPLAY__LOCALE` -> `display.locale`,
//! `FITTABLE_CATALOG__PATH` -> `catalog.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fit_config::FitConfig;
//!
//! let config = FitConfig::load().expect("config");
//!
//! if config.catalog.is_configured() {
//!     println!("Catalog: {}", config.catalog.path);
//! }
//! ```

mod catalog;
mod display;
mod error;

pub use catalog::CatalogConfig;
pub use display::DisplayConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "FITTABLE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FitConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl FitConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; the binary does that before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".fittable/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fittable").join("config.toml"))
    }
}
