use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Find the semester covering a date.
    Resolve(ResolveArgs),
    /// Normalize every record of a semester catalog.
    Normalize(NormalizeArgs),
    /// Decode season and academic years from a semester code.
    Decode(DecodeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ResolveArgs {
    /// JSON catalog of raw semesters (defaults to `catalog.path`)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Day to resolve, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// JSON catalog of raw semesters (defaults to `catalog.path`)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct DecodeArgs {
    /// Semester code, e.g. B151
    pub code: String,
}
