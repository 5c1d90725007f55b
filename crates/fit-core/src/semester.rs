//! Raw and normalized semester records.
//!
//! [`RawSemester`] is the record shape delivered by the timetable API. Field
//! names vary between API versions (`startsAt` vs `startsOn`), so the raw type
//! accepts both. [`convert_raw_semester`] validates a raw record and produces
//! the [`NormalizedSemester`] that the grid presenter and event placement
//! read from.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::code::{AcademicYears, SemesterCode};
use crate::dates::DateLike;
use crate::enums::{PeriodType, Season};
use crate::errors::InvalidSemesterError;
use crate::range::SemesterBounds;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Semester record as received from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawSemester {
    pub id: String,
    /// Short semester code, e.g. `B142`.
    pub semester: String,
    #[serde(alias = "startsAt")]
    pub starts_on: NaiveDate,
    #[serde(alias = "endsAt")]
    pub ends_on: NaiveDate,
    #[serde(default, alias = "examsStartsAt")]
    pub exams_starts_on: Option<NaiveDate>,
    #[serde(default, alias = "examsEndsAt")]
    pub exams_ends_on: Option<NaiveDate>,
    /// Fractional hour of day, `7.5` is 7:30.
    pub day_starts_at_hour: f64,
    pub day_ends_at_hour: f64,
    /// Length of one lesson in minutes.
    pub hour_duration: u32,
    /// Length of the break between lessons in minutes.
    pub break_duration: u32,
}

/// Daily teaching window, all values in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub starts: f64,
    pub ends: f64,
    pub lesson_duration: f64,
}

/// Named sub-range of a semester, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(rename = "type")]
    pub kind: PeriodType,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

/// Canonical semester used by the rest of the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSemester {
    pub id: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub season: Season,
    #[schemars(with = "[i32; 2]")]
    pub years: AcademicYears,
    pub grid: Grid,
    pub periods: Vec<Period>,
}

impl NormalizedSemester {
    /// First period covering `date`, if any.
    #[must_use]
    pub fn period_at(&self, date: impl DateLike) -> Option<&Period> {
        let day = date.to_day();
        self.periods.iter().find(|period| period.covers(day))
    }
}

/// Validate a raw record and convert it to a [`NormalizedSemester`].
///
/// # Errors
///
/// Returns [`InvalidSemesterError`] when the code does not decode, the
/// semester ends before it starts, the teaching window is empty or inverted,
/// or lessons would have no length.
pub fn convert_raw_semester(raw: &RawSemester) -> Result<NormalizedSemester, InvalidSemesterError> {
    let code = SemesterCode::parse(&raw.semester)?;

    if raw.starts_on > raw.ends_on {
        return Err(InvalidSemesterError::InvertedDateRange {
            id: raw.id.clone(),
            starts_on: raw.starts_on,
            ends_on: raw.ends_on,
        });
    }

    // NaN hours are unordered and fall through to the error.
    if raw.day_starts_at_hour.partial_cmp(&raw.day_ends_at_hour) != Some(Ordering::Less) {
        return Err(InvalidSemesterError::InvertedHourRange {
            id: raw.id.clone(),
            starts: raw.day_starts_at_hour,
            ends: raw.day_ends_at_hour,
        });
    }

    if raw.hour_duration == 0 && raw.break_duration == 0 {
        return Err(InvalidSemesterError::EmptyLesson {
            id: raw.id.clone(),
            hour_duration: raw.hour_duration,
            break_duration: raw.break_duration,
        });
    }

    Ok(NormalizedSemester {
        id: raw.id.clone(),
        starts_on: raw.starts_on,
        ends_on: raw.ends_on,
        season: code.season(),
        years: code.academic_years(),
        grid: Grid {
            starts: raw.day_starts_at_hour,
            ends: raw.day_ends_at_hour,
            lesson_duration: lesson_duration(raw.hour_duration, raw.break_duration),
        },
        periods: periods(raw),
    })
}

/// One grid slot in hours. Each break sits between two lessons, so a slot
/// carries half of it.
fn lesson_duration(hour_duration: u32, break_duration: u32) -> f64 {
    (f64::from(hour_duration) + f64::from(break_duration) / 2.0) / MINUTES_PER_HOUR
}

fn periods(raw: &RawSemester) -> Vec<Period> {
    let mut periods = Vec::new();
    if let (Some(starts_on), Some(ends_on)) = (raw.exams_starts_on, raw.exams_ends_on) {
        periods.push(Period {
            kind: PeriodType::Exams,
            starts_on,
            ends_on,
        });
    }
    periods
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn summer_2015() -> RawSemester {
        RawSemester {
            id: "18000-B142".into(),
            semester: "B142".into(),
            starts_on: date("2015-02-16"),
            ends_on: date("2015-09-21"),
            exams_starts_on: Some(date("2015-05-18")),
            exams_ends_on: Some(date("2015-06-27")),
            day_starts_at_hour: 7.5,
            day_ends_at_hour: 21.25,
            hour_duration: 45,
            break_duration: 15,
        }
    }

    #[test]
    fn converts_reference_record() {
        let expected = NormalizedSemester {
            id: "18000-B142".into(),
            starts_on: date("2015-02-16"),
            ends_on: date("2015-09-21"),
            season: Season::Summer,
            years: AcademicYears::starting(2014),
            grid: Grid {
                starts: 7.5,
                ends: 21.25,
                lesson_duration: 0.875,
            },
            periods: vec![Period {
                kind: PeriodType::Exams,
                starts_on: date("2015-05-18"),
                ends_on: date("2015-06-27"),
            }],
        };

        assert_eq!(convert_raw_semester(&summer_2015()).unwrap(), expected);
    }

    #[test]
    fn conversion_is_deterministic() {
        let raw = summer_2015();
        assert_eq!(
            convert_raw_semester(&raw).unwrap(),
            convert_raw_semester(&raw).unwrap()
        );
    }

    #[test]
    fn lesson_duration_counts_half_a_break() {
        assert_eq!(lesson_duration(45, 15), 0.875);
        assert_eq!(lesson_duration(60, 0), 1.0);
        assert_eq!(lesson_duration(0, 30), 0.25);
    }

    #[test]
    fn missing_exam_boundary_yields_no_periods() {
        let mut raw = summer_2015();
        raw.exams_ends_on = None;
        assert!(convert_raw_semester(&raw).unwrap().periods.is_empty());

        raw.exams_starts_on = None;
        assert!(convert_raw_semester(&raw).unwrap().periods.is_empty());
    }

    #[test]
    fn single_day_semester_is_valid() {
        let mut raw = summer_2015();
        raw.ends_on = raw.starts_on;
        assert!(convert_raw_semester(&raw).is_ok());
    }

    #[test]
    fn rejects_inverted_dates() {
        let mut raw = summer_2015();
        raw.ends_on = date("2015-02-15");

        let err = convert_raw_semester(&raw).unwrap_err();
        assert_eq!(
            err,
            InvalidSemesterError::InvertedDateRange {
                id: "18000-B142".into(),
                starts_on: date("2015-02-16"),
                ends_on: date("2015-02-15"),
            }
        );
    }

    #[test]
    fn rejects_empty_or_inverted_hours() {
        let mut raw = summer_2015();
        raw.day_ends_at_hour = raw.day_starts_at_hour;
        assert!(matches!(
            convert_raw_semester(&raw),
            Err(InvalidSemesterError::InvertedHourRange { .. })
        ));

        raw.day_ends_at_hour = 6.0;
        assert!(matches!(
            convert_raw_semester(&raw),
            Err(InvalidSemesterError::InvertedHourRange { .. })
        ));

        raw.day_ends_at_hour = f64::NAN;
        assert!(matches!(
            convert_raw_semester(&raw),
            Err(InvalidSemesterError::InvertedHourRange { .. })
        ));
    }

    #[test]
    fn rejects_zero_length_lessons() {
        let mut raw = summer_2015();
        raw.hour_duration = 0;
        raw.break_duration = 0;
        assert!(matches!(
            convert_raw_semester(&raw),
            Err(InvalidSemesterError::EmptyLesson { .. })
        ));
    }

    #[test]
    fn propagates_malformed_code() {
        let mut raw = summer_2015();
        raw.semester = "B14".into();
        let err = convert_raw_semester(&raw).unwrap_err();
        assert!(err.is_malformed_code());
    }

    #[test]
    fn period_lookup_is_inclusive() {
        let semester = convert_raw_semester(&summer_2015()).unwrap();

        assert_eq!(semester.period_at(date("2015-05-17")), None);
        assert_eq!(
            semester.period_at(date("2015-05-18")).map(|p| p.kind),
            Some(PeriodType::Exams)
        );
        assert!(semester.period_at(date("2015-06-27")).is_some());
        assert_eq!(semester.period_at(date("2015-06-28")), None);
    }
}
