use chrono::NaiveDate;
use fit_config::FitConfig;
use fit_core::Locale;
use fit_core::catalog::{NormalizedCatalog, normalize_catalog};
use fit_core::grid::GridLayout;
use fit_core::responses::ResolveResponse;

use crate::catalog::{catalog_path, load_raw_catalog};
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::output::output;

/// Handle `fittable resolve`.
pub fn handle(args: &ResolveArgs, config: &FitConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = catalog_path(args.catalog.as_deref(), config)?;
    let catalog = normalize_catalog(&load_raw_catalog(&path)?);
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let response = resolve(
        &catalog,
        date,
        super::effective_locale(flags, config),
        config.display.faculty_grid,
    );
    if response.semester.is_none() {
        tracing::info!(%date, "no semester covers the requested date");
    }

    output(&response, flags.format)
}

fn resolve(
    catalog: &NormalizedCatalog,
    date: NaiveDate,
    locale: Locale,
    faculty_grid: bool,
) -> ResolveResponse {
    let Some(semester) = catalog.find(date) else {
        return ResolveResponse {
            date,
            semester: None,
            label: None,
            layout: None,
            active_period: None,
        };
    };

    tracing::debug!(id = %semester.id, %date, "resolved semester");
    ResolveResponse {
        date,
        semester: Some(semester.clone()),
        label: Some(semester.label(locale)),
        layout: Some(GridLayout::new(&semester.grid, faculty_grid)),
        active_period: semester.period_at(date).cloned(),
    }
}
