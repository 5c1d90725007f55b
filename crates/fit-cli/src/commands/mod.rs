pub mod decode;
pub mod dispatch;
pub mod normalize;
pub mod resolve;

use fit_config::FitConfig;
use fit_core::Locale;

use crate::cli::GlobalFlags;

/// Locale for labels: `--locale` beats `display.locale`.
fn effective_locale(flags: &GlobalFlags, config: &FitConfig) -> Locale {
    flags.locale.unwrap_or(config.display.locale)
}
