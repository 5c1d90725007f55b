//! Where the semester catalog is read from.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a JSON array of raw semester records.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    pub fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }

    /// The configured catalog path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no path is set.
    pub fn require_path(&self) -> Result<PathBuf, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                field: "catalog.path".to_string(),
            });
        }
        Ok(PathBuf::from(&self.path))
    }
}
