use fit_config::FitConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &FitConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Resolve(args) => commands::resolve::handle(args, config, flags),
        Commands::Normalize(args) => commands::normalize::handle(args, config, flags),
        Commands::Decode(args) => commands::decode::handle(args, config, flags),
    }
}
