//! Maps loaded configuration onto library settings.

use cov_brief::BriefSettings;
use cov_config::{AccessConfig, BriefConfig, CovConfig, GroundingConfig};
use cov_core::viewer::{RoleToken, Viewer};
use cov_grounding::{GroundingRules, GroundingValidator};

pub fn load_config() -> anyhow::Result<CovConfig> {
    CovConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

/// Built-in rules with any configured overrides applied.
pub fn grounding_rules(config: &GroundingConfig) -> GroundingRules {
    let mut rules = GroundingRules::default();
    if let Some(markers) = &config.hedging_markers {
        rules = rules.with_markers(markers);
    }
    if let Some(max) = config.max_disclosure_chars {
        rules = rules.with_max_disclosure_chars(max);
    }
    rules
}

pub fn validator(config: &CovConfig) -> GroundingValidator {
    GroundingValidator::new(grounding_rules(&config.grounding))
}

pub fn brief_settings(config: &BriefConfig) -> BriefSettings {
    BriefSettings {
        recent_window_days: config.recent_window_days,
        recent_event_limit: config.recent_event_limit,
        coverage_sources: config.coverage_sources.clone(),
    }
}

/// Resolve the viewer for `role` from configured property assignments.
pub fn viewer(role: RoleToken, access: &AccessConfig) -> Viewer {
    if role == RoleToken::Am && !access.has_assignment() {
        tracing::warn!(
            "asset-manager role has no assigned properties; no events will be visible"
        );
    }
    role.into_viewer(&access.asset_manager_property_ids)
}
