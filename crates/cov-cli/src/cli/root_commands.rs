use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use cov_core::viewer::RoleToken;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the grounding rules over events and report the outcome.
    Validate(ValidateArgs),
    /// Build the executive brief for a date.
    Brief(BriefArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Portfolio dataset (JSON).
    #[arg(long)]
    pub data: PathBuf,

    /// Only report this event.
    #[arg(long)]
    pub event: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BriefArgs {
    /// Portfolio dataset (JSON).
    #[arg(long)]
    pub data: PathBuf,

    /// Brief date (YYYY-MM-DD); defaults to the latest stored brief.
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Viewer role: exec or am.
    #[arg(long, default_value = "exec")]
    pub role: RoleToken,
}
