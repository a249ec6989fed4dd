//! Hedging-language and length rules for the disclosure text.

use cov_core::entities::{Event, Validity};
use serde::Serialize;

use crate::citation;
use crate::rules::GroundingRules;

/// Outcome of the full memo check, citation rules included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl MemoResult {
    /// The value a caller stores as the event's cached validity.
    #[must_use]
    pub fn into_validity(self) -> Validity {
        if self.valid {
            Validity::Valid
        } else {
            Validity::Invalid {
                reasons: self.errors,
            }
        }
    }
}

pub(crate) fn check(event: &Event, rules: &GroundingRules) -> MemoResult {
    let Some(disclosure) = event.disclosure() else {
        return MemoResult {
            valid: true,
            ..MemoResult::default()
        };
    };

    let lowered = disclosure.to_lowercase();
    let mut errors: Vec<String> = rules
        .markers_in(&lowered)
        .map(|marker| format!("Contains speculative language: '{marker}'"))
        .collect();

    let max = rules.max_disclosure_chars();
    if disclosure.chars().count() > max {
        errors.push(format!("Memo exceeds {max} characters"));
    }

    let citations = citation::check(event);
    errors.extend(citations.errors);
    let mut warnings = citations.warnings;

    for (idx, slot) in event.context().iter().enumerate() {
        let Some(item) = slot else {
            continue;
        };
        let lowered = item.to_lowercase();
        if let Some(marker) = rules.markers_in(&lowered).next() {
            warnings.push(format!(
                "Context item {} contains uncertain language: '{marker}'",
                idx + 1
            ));
        }
    }

    MemoResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}
