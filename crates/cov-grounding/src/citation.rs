//! Citation and evidence-backing rules.

use std::collections::HashMap;

use cov_core::entities::{Event, EvidenceSource};
use cov_core::enums::{EventType, EvidenceTier};
use serde::Serialize;

use crate::text::{prefix_chars, quote_in_text, searchable_text};

/// Characters of an unmatched quote echoed back in its error.
const QUOTE_PREVIEW_CHARS: usize = 50;

/// Outcome of the citation rules for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CitationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub(crate) fn check(event: &Event) -> CitationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if event.evidence.is_empty() {
        errors.push("No evidence sources attached to event".to_string());
        return CitationResult {
            valid: false,
            errors,
            warnings,
        };
    }

    if event.event_type == EventType::SecFiling
        && !event
            .evidence
            .iter()
            .any(|ev| ev.is_sec_filing() && ev.tier == EvidenceTier::Primary)
    {
        errors.push("SEC filing event requires tier-1 SEC filing evidence".to_string());
    }

    let by_id: HashMap<&str, &EvidenceSource> = event
        .evidence
        .iter()
        .map(|ev| (ev.id.as_str(), ev))
        .collect();

    for (idx, slot) in event.key_details().iter().enumerate() {
        let n = idx + 1;
        let Some(detail) = slot else {
            continue;
        };

        if detail.citation.as_deref().is_none_or(str::is_empty) {
            warnings.push(format!("Key detail {n} missing citation"));
            continue;
        }

        let Some(evidence_id) = detail.evidence_id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };
        let Some(evidence) = by_id.get(evidence_id) else {
            errors.push(format!(
                "Key detail {n} references non-existent evidence_id: {evidence_id}"
            ));
            continue;
        };

        if let Some(quote) = detail.quote_text.as_deref().filter(|q| !q.is_empty())
            && !quote_in_text(quote, &searchable_text(evidence))
        {
            errors.push(format!(
                "Key detail {n} quote_text not found in evidence: '{}...'",
                prefix_chars(quote, QUOTE_PREVIEW_CHARS)
            ));
        }
    }

    if !event.evidence.iter().any(|ev| ev.tier.supports_severity()) {
        warnings.push("Event only has tier-3 evidence; severity may be limited".to_string());
    }

    CitationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}
