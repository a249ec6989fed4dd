use cov_config::CovConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod brief;
pub mod validate;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, config: &CovConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Validate(args) => validate::handle(args, config, flags),
        Commands::Brief(args) => brief::handle(args, config, flags),
    }
}
