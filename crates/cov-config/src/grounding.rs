//! Grounding rule overrides.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Overrides for the validator's built-in rules. Unset fields keep the
/// library defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroundingConfig {
    /// Replaces the built-in hedging phrase list when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hedging_markers: Option<Vec<String>>,

    /// Replaces the built-in disclosure length limit when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_disclosure_chars: Option<usize>,
}

impl GroundingConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(markers) = &self.hedging_markers
            && markers.iter().all(|marker| marker.trim().is_empty())
        {
            return Err(ConfigError::invalid(
                "grounding.hedging_markers",
                "override must contain at least one non-blank phrase",
            ));
        }
        if self.max_disclosure_chars == Some(0) {
            return Err(ConfigError::invalid(
                "grounding.max_disclosure_chars",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_rules_untouched() {
        let config = GroundingConfig::default();
        assert!(config.hedging_markers.is_none());
        assert!(config.max_disclosure_chars.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_marker_override_is_rejected() {
        let config = GroundingConfig {
            hedging_markers: Some(vec!["  ".into()]),
            ..GroundingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("grounding.hedging_markers"));
    }
}
