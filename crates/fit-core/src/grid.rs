//! Presenter-facing grid settings derived from a semester [`Grid`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::semester::Grid;

/// Settings the weekly grid is drawn with.
///
/// With `faculty_grid` off the grid is drawn in plain clock hours
/// (`lesson_duration == 1.0`). With it on, rows follow the faculty's lesson
/// slots and are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub starts: f64,
    pub ends: f64,
    pub lesson_duration: f64,
    pub hours_starts_at1: bool,
    /// Number of faculty lesson slots in the teaching day.
    pub faculty_hours: f64,
    pub faculty_grid: bool,
}

impl GridLayout {
    #[must_use]
    pub fn new(grid: &Grid, faculty_grid: bool) -> Self {
        Self {
            starts: grid.starts,
            ends: grid.ends,
            lesson_duration: if faculty_grid { grid.lesson_duration } else { 1.0 },
            hours_starts_at1: faculty_grid,
            faculty_hours: (grid.ends - grid.starts) / grid.lesson_duration,
            faculty_grid,
        }
    }
}
