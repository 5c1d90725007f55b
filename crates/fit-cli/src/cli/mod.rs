use clap::Parser;
use fit_core::Locale;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fittable` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fittable",
    version,
    about = "fittable - semester resolution for the timetable"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Label language: en, cs (defaults to `display.locale`)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            locale: self.locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::{CommandFactory, Parser};
    use fit_core::Locale;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "fittable", "--format", "raw", "--verbose", "decode", "B142",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Decode(ref args) if args.code == "B142"));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fittable", "decode", "B151", "--quiet", "--locale", "cs",
        ])
        .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.global_flags().locale, Some(Locale::Cs));
    }

    #[test]
    fn resolve_parses_date_and_catalog() {
        let cli = Cli::try_parse_from([
            "fittable",
            "resolve",
            "--catalog",
            "semesters.json",
            "--date",
            "2015-03-01",
        ])
        .expect("cli should parse");

        let Commands::Resolve(args) = cli.command else {
            panic!("expected resolve command");
        };
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2015, 3, 1));
        assert_eq!(
            args.catalog.as_deref(),
            Some(std::path::Path::new("semesters.json"))
        );
    }

    #[test]
    fn invalid_date_is_rejected() {
        let parsed = Cli::try_parse_from(["fittable", "resolve", "--date", "2015-02-30"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let parsed = Cli::try_parse_from(["fittable", "--locale", "de", "decode", "B151"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["fittable", "--format", "xml", "decode", "B151"]);
        assert!(parsed.is_err());
    }
}
