//! How semesters are presented to the user.

use fit_core::Locale;
use serde::{Deserialize, Serialize};

/// Default grid mode: faculty lesson slots rather than clock hours.
const fn default_faculty_grid() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Language for semester labels (`en` or `cs`).
    #[serde(default)]
    pub locale: Locale,

    /// Draw the grid in faculty lesson slots instead of clock hours.
    #[serde(default = "default_faculty_grid")]
    pub faculty_grid: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            faculty_grid: default_faculty_grid(),
        }
    }
}
