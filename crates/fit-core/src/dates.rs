//! Day-granular date inputs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Anything that names a calendar day.
///
/// Semester boundaries are whole days, so timestamps are truncated to their
/// date before comparison. Zoned timestamps use the date in their own zone.
pub trait DateLike {
    fn to_day(&self) -> NaiveDate;
}

impl DateLike for NaiveDate {
    fn to_day(&self) -> NaiveDate {
        *self
    }
}

impl DateLike for NaiveDateTime {
    fn to_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_day(&self) -> NaiveDate {
        (**self).to_day()
    }
}
