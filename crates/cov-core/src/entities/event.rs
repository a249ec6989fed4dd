use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EvidenceSource;
use crate::enums::EventType;
use crate::lenient;

/// A material disclosure about one tenant. Memos attach here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Event {
    pub id: String,
    pub tenant_id: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub headline: String,
    #[serde(default)]
    pub memo: Option<EventMemo>,
    /// Complete evidence set once loaded. Order carries no meaning for
    /// validation; see [`Event::evidence_for_display`].
    #[serde(default)]
    pub evidence: Vec<EvidenceSource>,
    /// Validation outcome cached by the storage layer.
    #[serde(default)]
    pub validity: Validity,
}

impl Event {
    /// The primary disclosure text, if the event carries a non-empty one.
    #[must_use]
    pub fn disclosure(&self) -> Option<&str> {
        self.memo
            .as_ref()
            .and_then(|memo| memo.what_disclosed.as_deref())
            .filter(|text| !text.is_empty())
    }

    /// One-line summary: the disclosure text, or the headline when absent.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.disclosure().unwrap_or(&self.headline)
    }

    /// Key detail slots in memo order; empty without a memo. A `None` slot
    /// is an entry that was not an object.
    #[must_use]
    pub fn key_details(&self) -> &[Option<KeyDetail>] {
        match &self.memo {
            Some(memo) => &memo.key_details,
            None => &[],
        }
    }

    /// Context slots in memo order; empty without a memo. A `None` slot is
    /// an entry that was not a string.
    #[must_use]
    pub fn context(&self) -> &[Option<String>] {
        match &self.memo {
            Some(memo) => &memo.context,
            None => &[],
        }
    }

    /// Evidence ordered for display: tier ascending, then newest first.
    #[must_use]
    pub fn evidence_for_display(&self) -> Vec<&EvidenceSource> {
        let mut ordered: Vec<&EvidenceSource> = self.evidence.iter().collect();
        ordered.sort_by(|a, b| {
            a.tier
                .cmp(&b.tier)
                .then_with(|| b.source_date.cmp(&a.source_date))
        });
        ordered
    }
}

/// Structured narrative attached to an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventMemo {
    #[serde(default)]
    pub what_disclosed: Option<String>,
    #[serde(default, deserialize_with = "lenient::keep_slots")]
    #[schemars(with = "Vec<Option<KeyDetail>>")]
    pub key_details: Vec<Option<KeyDetail>>,
    #[serde(default, deserialize_with = "lenient::keep_slots")]
    #[schemars(with = "Vec<Option<String>>")]
    pub context: Vec<Option<String>>,
    #[serde(default)]
    pub why_it_matters: Option<String>,
    #[serde(default, deserialize_with = "lenient::skip_malformed_opt")]
    #[schemars(with = "Option<Vec<String>>")]
    pub recommended_actions: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::skip_malformed_opt")]
    #[schemars(with = "Option<Vec<String>>")]
    pub what_to_watch: Option<Vec<String>>,
}

/// One factual claim in a memo and where it comes from.
///
/// Fields load independently: a wrongly typed citation does not take the
/// evidence reference beside it down with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KeyDetail {
    #[serde(default, deserialize_with = "lenient::scalar_text_or_empty")]
    #[schemars(with = "String")]
    pub fact: String,
    #[serde(default, deserialize_with = "lenient::scalar_text")]
    #[schemars(with = "Option<String>")]
    pub citation: Option<String>,
    #[serde(default, deserialize_with = "lenient::scalar_text")]
    #[schemars(with = "Option<String>")]
    pub evidence_id: Option<String>,
    /// Verbatim passage expected inside the referenced evidence.
    #[serde(default, deserialize_with = "lenient::scalar_text")]
    #[schemars(with = "Option<String>")]
    pub quote_text: Option<String>,
}

/// Cached grounding outcome for an event.
///
/// Distinguishes "never evaluated" from "evaluated and failed"; the stored
/// failure reasons travel with the `Invalid` variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Validity {
    #[default]
    Unevaluated,
    Valid,
    Invalid {
        #[serde(default)]
        reasons: Vec<String>,
    },
}

impl Validity {
    /// The cached verdict, or `None` when nothing has been stored yet.
    #[must_use]
    pub const fn cached(&self) -> Option<bool> {
        match self {
            Self::Unevaluated => None,
            Self::Valid => Some(true),
            Self::Invalid { .. } => Some(false),
        }
    }
}
