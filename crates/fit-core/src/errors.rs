//! Validation errors for semester codes and raw semester records.
//!
//! Both errors describe a problem with a single input record. Catalog-level
//! code reports them and moves on to the next record (see
//! [`crate::catalog::normalize_catalog`]). "No semester covers this day" is not
//! an error and is modelled as `None` by the resolver.

use chrono::NaiveDate;
use thiserror::Error;

/// A semester code did not match `B` followed by three digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed semester code '{code}': {reason}")]
pub struct MalformedCodeError {
    pub code: String,
    pub reason: &'static str,
}

impl MalformedCodeError {
    pub(crate) fn new(code: &str, reason: &'static str) -> Self {
        Self {
            code: code.to_owned(),
            reason,
        }
    }
}

/// A raw semester record is structurally inconsistent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidSemesterError {
    /// The teaching period ends before it starts.
    #[error("Invalid semester {id}: starts on {starts_on} after it ends on {ends_on}")]
    InvertedDateRange {
        id: String,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    },

    /// The daily teaching window is empty, inverted, or not a number.
    #[error("Invalid semester {id}: day starts at hour {starts} but ends at hour {ends}")]
    InvertedHourRange { id: String, starts: f64, ends: f64 },

    /// Lesson and break durations add up to nothing.
    #[error(
        "Invalid semester {id}: lesson of {hour_duration} min with {break_duration} min break has no length"
    )]
    EmptyLesson {
        id: String,
        hour_duration: u32,
        break_duration: u32,
    },

    /// The semester code could not be decoded.
    #[error(transparent)]
    MalformedCode(#[from] MalformedCodeError),
}

impl InvalidSemesterError {
    /// Whether this failure came from the code decoder.
    #[must_use]
    pub const fn is_malformed_code(&self) -> bool {
        matches!(self, Self::MalformedCode(_))
    }
}
