use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EvidenceTier, SourceType};

/// A source document supporting exactly one event.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvidenceSource {
    pub id: String,
    pub event_id: String,
    pub source_type: SourceType,
    pub title: String,
    pub publisher: String,
    pub source_date: NaiveDate,
    #[serde(default)]
    pub url: Option<String>,
    /// Relevant passage.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Full document text, kept for quote verification.
    #[serde(default)]
    pub raw_text: Option<String>,
    /// "Page 47", "Section 4.2", ...
    #[serde(default)]
    pub page_reference: Option<String>,
    #[schemars(with = "u8")]
    pub tier: EvidenceTier,
}

impl EvidenceSource {
    /// Whether this source is an SEC filing, regardless of tier.
    #[must_use]
    pub fn is_sec_filing(&self) -> bool {
        self.source_type == SourceType::SecFiling
    }
}
