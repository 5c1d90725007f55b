//! Day-granular membership checks against semester boundaries.

use chrono::NaiveDate;
use std::ops::RangeInclusive;

use crate::dates::DateLike;
use crate::semester::{NormalizedSemester, Period, RawSemester};

/// A record with inclusive start and end days.
pub trait SemesterBounds {
    fn starts_on(&self) -> NaiveDate;
    fn ends_on(&self) -> NaiveDate;

    /// Whether `day` lies within the bounds, both ends included.
    fn covers(&self, day: NaiveDate) -> bool {
        self.starts_on() <= day && day <= self.ends_on()
    }
}

impl SemesterBounds for NormalizedSemester {
    fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }
}

impl SemesterBounds for RawSemester {
    fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }
}

impl SemesterBounds for Period {
    fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }
}

impl SemesterBounds for RangeInclusive<NaiveDate> {
    fn starts_on(&self) -> NaiveDate {
        *self.start()
    }

    fn ends_on(&self) -> NaiveDate {
        *self.end()
    }
}

impl<S: SemesterBounds + ?Sized> SemesterBounds for &S {
    fn starts_on(&self) -> NaiveDate {
        (**self).starts_on()
    }

    fn ends_on(&self) -> NaiveDate {
        (**self).ends_on()
    }
}

/// Whether `date` falls within `semester`.
///
/// Time of day is ignored; a timestamp late on the last day still counts.
#[must_use]
pub fn date_in_semester<S: SemesterBounds + ?Sized>(semester: &S, date: impl DateLike) -> bool {
    semester.covers(date.to_day())
}
