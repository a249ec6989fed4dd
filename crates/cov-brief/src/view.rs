//! Output shapes of a built brief.
//!
//! Executive-layer fields are `Option`s skipped when `None`, so an asset
//! manager's brief does not carry the keys at all.

use chrono::{DateTime, NaiveDate, Utc};
use cov_core::entities::{
    ConcentrationInsight, NarrativeBullet, PortfolioVerdict, StatusCounts,
};
use cov_core::enums::{EventType, TenantStatus};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The assembled brief for one as-of date and one viewer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BriefView {
    pub id: String,
    pub as_of_date: NaiveDate,
    pub headline: String,
    pub updated_at: DateTime<Utc>,
    pub status_counts: StatusCounts,
    pub status_changes: StatusChanges,
    pub recent_events: Vec<EventView>,
    pub properties_attention: Vec<PropertyAttention>,
    pub coverage: CoverageStatement,
    pub posture: Vec<PostureTile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_verdict: Option<PortfolioVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative_bullets: Option<Vec<NarrativeBullet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration_insights: Option<Vec<ConcentrationInsight>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec_questions: Option<Vec<String>>,
}

/// Three-way partition of the current period's tenants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChanges {
    pub to_watch_or_critical: Vec<StatusChangeItem>,
    pub to_improving: Vec<StatusChangeItem>,
    pub unchanged: u32,
}

impl StatusChanges {
    /// Tenants accounted for across all three buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.to_watch_or_critical.len() + self.to_improving.len() + self.unchanged as usize
    }
}

/// A tenant that crossed into a flagged band or into improving.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangeItem {
    pub tenant_id: String,
    pub tenant_name: String,
    pub previous_status: TenantStatus,
    pub new_status: TenantStatus,
    /// The tenant's most recent event, when it has one.
    pub event_id: Option<String>,
    pub event_headline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PropertyBadge {
    pub id: String,
    pub name: String,
}

/// An event as shown in the brief's recent list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventView {
    pub id: String,
    pub tenant_id: String,
    pub tenant_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub headline: String,
    pub summary: String,
    pub evidence_count: u32,
    pub properties: Vec<PropertyBadge>,
}

/// A property with the worst status among its tenants.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PropertyAttention {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub status: TenantStatus,
    /// Tenants in a flagged band (critical or watch).
    pub issues_count: u32,
    pub tenant_count: u32,
}

/// What the brief covers and where it looked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CoverageStatement {
    pub tenants_monitored: u32,
    pub tenants_with_disclosures: u32,
    pub sources: Vec<String>,
    pub as_of_date: NaiveDate,
}

/// Direction of a count between two periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeltaDirection {
    Up,
    Down,
    Unchanged,
}

/// Count of tenants in one band and its change since the previous period.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PostureTile {
    pub status: TenantStatus,
    pub count: u32,
    pub delta: i64,
    pub delta_direction: DeltaDirection,
}
