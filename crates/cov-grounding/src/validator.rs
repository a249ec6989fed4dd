use cov_core::entities::Event;
use cov_core::enums::EventType;

use crate::citation::{self, CitationResult};
use crate::memo::{self, MemoResult};
use crate::rules::GroundingRules;

/// Runs the grounding rules over events.
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct GroundingValidator {
    rules: GroundingRules,
}

impl GroundingValidator {
    #[must_use]
    pub const fn new(rules: GroundingRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &GroundingRules {
        &self.rules
    }

    /// Check that the event's citations are backed by its evidence.
    ///
    /// Missing evidence short-circuits; every other rule accumulates.
    #[must_use]
    pub fn validate_citations(&self, event: &Event) -> CitationResult {
        let result = citation::check(event);
        tracing::debug!(
            event_id = %event.id,
            valid = result.valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "citation validation"
        );
        result
    }

    /// Full memo check: hedging markers and length on the disclosure,
    /// citation rules, and advisory scans of the context items.
    ///
    /// An event without disclosure text is trivially valid.
    #[must_use]
    pub fn validate_memo(&self, event: &Event) -> MemoResult {
        let result = memo::check(event, &self.rules);
        tracing::debug!(
            event_id = %event.id,
            valid = result.valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "memo validation"
        );
        result
    }

    /// Gate applied before an event is shown to anyone.
    ///
    /// Evidence presence and SEC source type are always checked. The SEC
    /// check does not look at the tier: it is looser than
    /// [`Self::validate_citations`]. A cached verdict is then returned as-is;
    /// without one the memo is validated, and the result is not stored.
    #[must_use]
    pub fn is_valid_for_display(&self, event: &Event) -> bool {
        if event.evidence.is_empty() {
            return false;
        }

        if event.event_type == EventType::SecFiling
            && !event.evidence.iter().any(|ev| ev.is_sec_filing())
        {
            return false;
        }

        if let Some(cached) = event.validity.cached() {
            return cached;
        }

        self.validate_memo(event).valid
    }
}
