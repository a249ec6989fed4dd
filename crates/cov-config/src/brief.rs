//! Brief assembly settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_window_days() -> u32 {
    7
}

const fn default_event_limit() -> usize {
    7
}

const fn default_previous_period_days() -> u32 {
    7
}

fn default_coverage_sources() -> Vec<String> {
    ["SEC EDGAR", "Reuters", "Court Records"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BriefConfig {
    /// Trailing window for recent events, in days.
    #[serde(default = "default_window_days")]
    pub recent_window_days: u32,

    /// Maximum recent events per brief.
    #[serde(default = "default_event_limit")]
    pub recent_event_limit: usize,

    /// Distance back to the snapshots that transitions compare against.
    #[serde(default = "default_previous_period_days")]
    pub previous_period_days: u32,

    /// Source labels shown in the coverage statement.
    #[serde(default = "default_coverage_sources")]
    pub coverage_sources: Vec<String>,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            recent_window_days: default_window_days(),
            recent_event_limit: default_event_limit(),
            previous_period_days: default_previous_period_days(),
            coverage_sources: default_coverage_sources(),
        }
    }
}

impl BriefConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_window_days == 0 {
            return Err(ConfigError::invalid(
                "brief.recent_window_days",
                "must be greater than zero",
            ));
        }
        if self.recent_event_limit == 0 {
            return Err(ConfigError::invalid(
                "brief.recent_event_limit",
                "must be greater than zero",
            ));
        }
        if self.previous_period_days == 0 {
            return Err(ConfigError::invalid(
                "brief.previous_period_days",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
