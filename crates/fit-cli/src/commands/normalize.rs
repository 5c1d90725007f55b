use fit_config::FitConfig;
use fit_core::catalog::normalize_catalog;
use fit_core::responses::NormalizeResponse;

use crate::catalog::{catalog_path, load_raw_catalog};
use crate::cli::GlobalFlags;
use crate::cli::root_commands::NormalizeArgs;
use crate::output::output;

/// Handle `fittable normalize`.
pub fn handle(
    args: &NormalizeArgs,
    config: &FitConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = catalog_path(args.catalog.as_deref(), config)?;
    let raws = load_raw_catalog(&path)?;
    let catalog = normalize_catalog(&raws);

    if !catalog.rejected.is_empty() {
        tracing::warn!(
            rejected = catalog.rejected.len(),
            total = raws.len(),
            "some semester records were rejected"
        );
    }

    output(
        &NormalizeResponse {
            semesters: catalog.semesters,
            rejected: catalog.rejected,
        },
        flags.format,
    )
}
