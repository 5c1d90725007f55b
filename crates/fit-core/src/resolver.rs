//! Finding the semester that covers a day.
//!
//! Ties are resolved by input order: when two records cover the same day
//! (typically a shared boundary day) the one listed first wins. Both
//! [`find_semester`] and [`SemesterIndex`] follow this policy.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::DateLike;
pub use crate::range::SemesterBounds;

/// Minimal catalog record carrying only an id and its boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    #[serde(alias = "startsAt")]
    pub starts_on: NaiveDate,
    #[serde(alias = "endsAt")]
    pub ends_on: NaiveDate,
}

impl SemesterBounds for CatalogEntry {
    fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }
}

/// First semester in `semesters` covering `date`, scanning in input order.
#[must_use]
pub fn find_semester<S: SemesterBounds>(semesters: &[S], date: impl DateLike) -> Option<&S> {
    let day = date.to_day();
    semesters.iter().find(|semester| semester.covers(day))
}

/// Sorted lookup over a borrowed catalog.
///
/// Answers the same question as [`find_semester`] without a full scan. Among
/// all records covering a day, the one with the lowest input position is
/// returned.
#[derive(Debug, Clone)]
pub struct SemesterIndex<'a, S> {
    semesters: &'a [S],
    /// Input positions ordered by start day.
    order: Vec<usize>,
    /// `reach[k]` is the latest end day among `order[..=k]`.
    reach: Vec<NaiveDate>,
}

impl<'a, S: SemesterBounds> SemesterIndex<'a, S> {
    #[must_use]
    pub fn new(semesters: &'a [S]) -> Self {
        let mut order = (0..semesters.len()).collect::<Vec<_>>();
        order.sort_by_key(|&i| (semesters[i].starts_on(), i));

        let reach = order
            .iter()
            .scan(NaiveDate::MIN, |latest, &i| {
                *latest = (*latest).max(semesters[i].ends_on());
                Some(*latest)
            })
            .collect();

        Self {
            semesters,
            order,
            reach,
        }
    }

    #[must_use]
    pub fn find(&self, date: impl DateLike) -> Option<&'a S> {
        let day = date.to_day();
        let started = self
            .order
            .partition_point(|&i| self.semesters[i].starts_on() <= day);

        (0..started)
            .rev()
            .take_while(|&k| self.reach[k] >= day)
            .map(|k| self.order[k])
            .filter(|&i| self.semesters[i].covers(day))
            .min()
            .map(|i| &self.semesters[i])
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.semesters.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }
}
