//! Human-readable semester names.
//!
//! The locale is always passed in. Nothing here reads or changes process-wide
//! state, so two callers can format the same semester in different languages
//! at the same time.

use crate::code::AcademicYears;
use crate::enums::{Locale, Season};
use crate::semester::NormalizedSemester;

/// Format a semester name such as `Winter semester 2015/2016`.
#[must_use]
pub fn semester_label(season: Season, years: AcademicYears, locale: Locale) -> String {
    let name = match (locale, season) {
        (Locale::En, Season::Winter) => "Winter semester",
        (Locale::En, Season::Summer) => "Summer semester",
        (Locale::Cs, Season::Winter) => "Zimní semestr",
        (Locale::Cs, Season::Summer) => "Letní semestr",
    };
    format!("{name} {years}")
}

impl NormalizedSemester {
    #[must_use]
    pub fn label(&self, locale: Locale) -> String {
        semester_label(self.season, self.years, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Season::Winter, 2015, Locale::En, "Winter semester 2015/2016")]
    #[case(Season::Summer, 2014, Locale::En, "Summer semester 2014/2015")]
    #[case(Season::Winter, 2015, Locale::Cs, "Zimní semestr 2015/2016")]
    #[case(Season::Summer, 2099, Locale::Cs, "Letní semestr 2099/2100")]
    fn formats_label(
        #[case] season: Season,
        #[case] begin: i32,
        #[case] locale: Locale,
        #[case] expected: &str,
    ) {
        assert_eq!(
            semester_label(season, AcademicYears::starting(begin), locale),
            expected
        );
    }
}
