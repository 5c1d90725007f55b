use std::path::{Path, PathBuf};

use anyhow::Context;
use fit_config::FitConfig;
use fit_core::RawSemester;

/// Pick the catalog path: the explicit flag wins over `catalog.path`.
pub fn catalog_path(explicit: Option<&Path>, config: &FitConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    config
        .catalog
        .require_path()
        .context("no catalog given; pass --catalog or set catalog.path")
}

/// Read a JSON array of raw semester records.
///
/// Dates are parsed here, so a malformed date fails the whole file before
/// any record reaches the normalizer.
pub fn load_raw_catalog(path: &Path) -> anyhow::Result<Vec<RawSemester>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog at {}", path.display()))?;
    let raws: Vec<RawSemester> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog at {}", path.display()))?;

    tracing::debug!(path = %path.display(), records = raws.len(), "loaded semester catalog");
    Ok(raws)
}
