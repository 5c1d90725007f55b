//! # fit-core
//!
//! Semester resolution for the fittable timetable.
//!
//! This crate holds the calendar logic the timetable presenter relies on:
//! - Decoding season and academic year from a semester code (`B142`)
//! - Normalizing raw semester records into grid + period form
//! - Resolving which semester of a catalog covers a given day
//! - Day-granular range checks against a semester
//! - Label and grid layout helpers for the presentation layer
//!
//! Everything here is pure and synchronous. Fetching catalogs is left to the
//! caller.

pub mod catalog;
pub mod code;
pub mod dates;
pub mod enums;
pub mod errors;
pub mod grid;
pub mod label;
pub mod range;
pub mod resolver;
pub mod responses;
pub mod semester;

pub use code::{AcademicYears, SemesterCode, academic_years, season};
pub use dates::DateLike;
pub use enums::{Locale, PeriodType, Season};
pub use errors::{InvalidSemesterError, MalformedCodeError};
pub use range::date_in_semester;
pub use resolver::{CatalogEntry, SemesterBounds, SemesterIndex, find_semester};
pub use semester::{Grid, NormalizedSemester, Period, RawSemester, convert_raw_semester};
