//! Semester code decoding.
//!
//! Codes look like `B142`: a `B` prefix, a two-digit short year (`14`) and a
//! parity digit (`2`). The short year is the first calendar year of the
//! academic year; the parity digit selects the season.
//!
//! ```
//! use fit_core::{Season, academic_years, season};
//!
//! assert_eq!(season("B151").unwrap(), Season::Winter);
//! assert_eq!(academic_years("B151").unwrap().to_array(), [2015, 2016]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::Season;
use crate::errors::MalformedCodeError;

/// Short years are read as years of this century.
pub const CENTURY: i32 = 2000;

const PREFIX: char = 'B';

/// A decoded semester code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemesterCode {
    year_token: u8,
    parity_digit: u8,
}

impl SemesterCode {
    /// Parse a code such as `B142`.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedCodeError`] when the prefix is missing or the suffix is
    /// not exactly three ASCII digits.
    pub fn parse(code: &str) -> Result<Self, MalformedCodeError> {
        let digits = code
            .strip_prefix(PREFIX)
            .ok_or_else(|| MalformedCodeError::new(code, "missing 'B' prefix"))?;

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MalformedCodeError::new(code, "non-numeric suffix"));
        }

        let &[tens, ones, parity] = digits.as_bytes() else {
            let reason = if digits.len() < 3 {
                "too short, expected three digits"
            } else {
                "too long, expected three digits"
            };
            return Err(MalformedCodeError::new(code, reason));
        };

        Ok(Self {
            year_token: (tens - b'0') * 10 + (ones - b'0'),
            parity_digit: parity - b'0',
        })
    }

    /// Two-digit year token, `14` for `B142`.
    #[must_use]
    pub const fn year_token(self) -> u8 {
        self.year_token
    }

    /// Trailing digit that encodes the season.
    #[must_use]
    pub const fn parity_digit(self) -> u8 {
        self.parity_digit
    }

    #[must_use]
    pub const fn season(self) -> Season {
        Season::from_parity_digit(self.parity_digit)
    }

    #[must_use]
    pub fn academic_years(self) -> AcademicYears {
        AcademicYears::starting(CENTURY + i32::from(self.year_token))
    }
}

impl FromStr for SemesterCode {
    type Err = MalformedCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemesterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{:02}{}", self.year_token, self.parity_digit)
    }
}

/// Decode the season of a semester code.
///
/// # Errors
///
/// Returns [`MalformedCodeError`] if `code` does not parse.
pub fn season(code: &str) -> Result<Season, MalformedCodeError> {
    SemesterCode::parse(code).map(SemesterCode::season)
}

/// Decode the academic year pair of a semester code.
///
/// # Errors
///
/// Returns [`MalformedCodeError`] if `code` does not parse.
pub fn academic_years(code: &str) -> Result<AcademicYears, MalformedCodeError> {
    SemesterCode::parse(code).map(SemesterCode::academic_years)
}

// ---------------------------------------------------------------------------
// AcademicYears
// ---------------------------------------------------------------------------

/// The two calendar years an academic year spans, e.g. 2015/2016.
///
/// Only the first year is stored, so the second is always `begin + 1`.
/// Serializes as a `[begin, end]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "[i32; 2]", try_from = "[i32; 2]")]
pub struct AcademicYears {
    begin: i32,
}

impl AcademicYears {
    /// Academic year starting in `begin`, which must be below `i32::MAX`.
    #[must_use]
    pub const fn starting(begin: i32) -> Self {
        Self { begin }
    }

    #[must_use]
    pub const fn begin(self) -> i32 {
        self.begin
    }

    #[must_use]
    pub const fn end(self) -> i32 {
        self.begin + 1
    }

    #[must_use]
    pub const fn to_array(self) -> [i32; 2] {
        [self.begin(), self.end()]
    }
}

impl From<AcademicYears> for [i32; 2] {
    fn from(years: AcademicYears) -> Self {
        years.to_array()
    }
}

impl TryFrom<[i32; 2]> for AcademicYears {
    type Error = String;

    fn try_from([begin, end]: [i32; 2]) -> Result<Self, Self::Error> {
        if begin.checked_add(1) != Some(end) {
            return Err(format!(
                "academic years must be consecutive, got {begin}/{end}"
            ));
        }
        Ok(Self::starting(begin))
    }
}

impl fmt::Display for AcademicYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.begin(), self.end())
    }
}
