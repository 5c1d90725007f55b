use anyhow::Context;
use fit_config::FitConfig;
use fit_core::label::semester_label;
use fit_core::responses::DecodeResponse;
use fit_core::{Locale, SemesterCode};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DecodeArgs;
use crate::output::output;

/// Handle `fittable decode`.
pub fn handle(args: &DecodeArgs, config: &FitConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = decode(&args.code, super::effective_locale(flags, config))?;
    output(&response, flags.format)
}

fn decode(code: &str, locale: Locale) -> anyhow::Result<DecodeResponse> {
    let parsed = SemesterCode::parse(code).context("cannot decode semester code")?;

    Ok(DecodeResponse {
        code: parsed.to_string(),
        season: parsed.season(),
        years: parsed.academic_years(),
        label: semester_label(parsed.season(), parsed.academic_years(), locale),
    })
}
