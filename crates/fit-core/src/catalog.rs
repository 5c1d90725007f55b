//! Normalizing a whole semester catalog.
//!
//! A bad record never aborts the catalog. It is logged, reported in
//! [`NormalizedCatalog::rejected`], and the remaining records are still
//! converted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::DateLike;
use crate::resolver::{SemesterIndex, find_semester};
use crate::semester::{NormalizedSemester, RawSemester, convert_raw_semester};

/// A raw record that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RejectedSemester {
    pub id: String,
    pub reason: String,
}

/// Result of normalizing a catalog. Accepted semesters keep input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedCatalog {
    pub semesters: Vec<NormalizedSemester>,
    pub rejected: Vec<RejectedSemester>,
}

impl NormalizedCatalog {
    /// First accepted semester covering `date`.
    #[must_use]
    pub fn find(&self, date: impl DateLike) -> Option<&NormalizedSemester> {
        find_semester(&self.semesters, date)
    }

    #[must_use]
    pub fn index(&self) -> SemesterIndex<'_, NormalizedSemester> {
        SemesterIndex::new(&self.semesters)
    }
}

/// Convert every record of `raws`, collecting the ones that fail.
pub fn normalize_catalog<'a, I>(raws: I) -> NormalizedCatalog
where
    I: IntoIterator<Item = &'a RawSemester>,
{
    let mut catalog = NormalizedCatalog::default();

    for raw in raws {
        match convert_raw_semester(raw) {
            Ok(semester) => catalog.semesters.push(semester),
            Err(error) => {
                tracing::warn!(id = %raw.id, %error, "skipping invalid semester record");
                catalog.rejected.push(RejectedSemester {
                    id: raw.id.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        accepted = catalog.semesters.len(),
        rejected = catalog.rejected.len(),
        "normalized semester catalog"
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn raw(id: &str, code: &str, starts_on: &str, ends_on: &str) -> RawSemester {
        RawSemester {
            id: id.into(),
            semester: code.into(),
            starts_on: date(starts_on),
            ends_on: date(ends_on),
            exams_starts_on: None,
            exams_ends_on: None,
            day_starts_at_hour: 7.5,
            day_ends_at_hour: 21.25,
            hour_duration: 45,
            break_duration: 15,
        }
    }

    #[test]
    fn keeps_good_records_and_reports_bad_ones() {
        let raws = vec![
            raw("18000-B142", "B142", "2014-10-01", "2015-02-15"),
            raw("18000-Bxx", "Bxx1", "2015-02-16", "2015-09-21"),
            raw("18000-B151", "B151", "2015-02-16", "2015-09-21"),
            raw("18000-B152", "B152", "2016-09-21", "2016-02-16"),
        ];

        let catalog = normalize_catalog(&raws);

        let ids = catalog
            .semesters
            .iter()
            .map(|s| s.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["18000-B142", "18000-B151"]);

        let rejected = catalog
            .rejected
            .iter()
            .map(|r| r.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(rejected, vec!["18000-Bxx", "18000-B152"]);
        assert_eq!(
            catalog.rejected[0].reason,
            "Malformed semester code 'Bxx1': non-numeric suffix"
        );
    }

    #[test]
    fn lookups_use_accepted_semesters() {
        let raws = vec![
            raw("18000-B142", "B142", "2014-10-01", "2015-02-15"),
            raw("18000-B151", "B151", "2015-02-16", "2015-09-21"),
        ];
        let catalog = normalize_catalog(&raws);

        assert_eq!(catalog.find(date("2015-02-15")).unwrap().id, "18000-B142");
        assert_eq!(
            catalog.index().find(date("2015-03-01")).unwrap().id,
            "18000-B151"
        );
        assert!(catalog.find(date("2016-01-01")).is_none());
    }
}
