//! Response types returned as JSON by `fittable` commands.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::RejectedSemester;
use crate::code::AcademicYears;
use crate::enums::Season;
use crate::grid::GridLayout;
use crate::semester::{NormalizedSemester, Period};

/// Response from `fittable resolve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub date: NaiveDate,
    /// `None` when no semester of the catalog covers `date`.
    pub semester: Option<NormalizedSemester>,
    pub label: Option<String>,
    pub layout: Option<GridLayout>,
    /// Sub-period of the semester that `date` falls in.
    pub active_period: Option<Period>,
}

/// Response from `fittable normalize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizeResponse {
    pub semesters: Vec<NormalizedSemester>,
    pub rejected: Vec<RejectedSemester>,
}

/// Response from `fittable decode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecodeResponse {
    pub code: String,
    pub season: Season,
    #[schemars(with = "[i32; 2]")]
    pub years: AcademicYears,
    pub label: String,
}
