//! Season, period type and display locale enums.
//!
//! All enums use lowercase serialization so they match the JSON shape the
//! timetable presenter reads (`"summer"`, `"exams"`, `"cs"`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// Academic season of a semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Season encoded by the parity digit of a semester code.
    ///
    /// Even digits are summer terms, odd digits winter terms.
    #[must_use]
    pub const fn from_parity_digit(digit: u8) -> Self {
        if digit % 2 == 0 {
            Self::Summer
        } else {
            Self::Winter
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PeriodType
// ---------------------------------------------------------------------------

/// Kind of sub-period inside a semester.
///
/// Only exam windows are recognized today. The enum is non-exhaustive so new
/// period kinds can be added without breaking downstream matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum PeriodType {
    Exams,
}

impl PeriodType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exams => "exams",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Language used for human-readable semester labels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Cs,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Cs => "cs",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "cs" => Ok(Self::Cs),
            other => Err(format!("unsupported locale '{other}', expected 'en' or 'cs'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_rule_covers_every_digit() {
        for digit in 0..10u8 {
            let expected = if digit % 2 == 0 {
                Season::Summer
            } else {
                Season::Winter
            };
            assert_eq!(Season::from_parity_digit(digit), expected, "digit {digit}");
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Season::Winter).unwrap(),
            "\"winter\""
        );
        assert_eq!(
            serde_json::to_string(&PeriodType::Exams).unwrap(),
            "\"exams\""
        );
        let locale: Locale = serde_json::from_str("\"cs\"").unwrap();
        assert_eq!(locale, Locale::Cs);
    }

    #[test]
    fn locale_parses_case_insensitively() {
        assert_eq!("CS".parse::<Locale>().unwrap(), Locale::Cs);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Season::Summer.to_string(), Season::Summer.as_str());
        assert_eq!(PeriodType::Exams.to_string(), "exams");
        assert_eq!(Locale::default().to_string(), "en");
    }
}
