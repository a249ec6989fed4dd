use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TenantStatus;

/// Point-in-time status for a tenant. Unique per `(tenant_id, as_of_date)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TenantScoreSnapshot {
    pub tenant_id: String,
    pub as_of_date: NaiveDate,
    pub status: TenantStatus,
    /// Internal 0-100 score, not used for ranking.
    #[serde(default)]
    pub score: Option<u8>,
}

/// Number of tenants in each status band.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusCounts {
    pub critical: u32,
    pub watch: u32,
    pub stable: u32,
    pub improving: u32,
}

impl StatusCounts {
    /// Tally the statuses of a snapshot set.
    #[must_use]
    pub fn tally<'a, I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = &'a TenantScoreSnapshot>,
    {
        let mut counts = Self::default();
        for snapshot in snapshots {
            *counts.slot_mut(snapshot.status) += 1;
        }
        counts
    }

    #[must_use]
    pub const fn get(&self, status: TenantStatus) -> u32 {
        match status {
            TenantStatus::Critical => self.critical,
            TenantStatus::Watch => self.watch,
            TenantStatus::Stable => self.stable,
            TenantStatus::Improving => self.improving,
        }
    }

    fn slot_mut(&mut self, status: TenantStatus) -> &mut u32 {
        match status {
            TenantStatus::Critical => &mut self.critical,
            TenantStatus::Watch => &mut self.watch,
            TenantStatus::Stable => &mut self.stable,
            TenantStatus::Improving => &mut self.improving,
        }
    }
}

/// Materialized weekly rollup for the portfolio.
///
/// Counts are denormalized at write time. Transitions, rankings and event
/// lists are recomputed from live data when the brief is built.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PortfolioBriefSnapshot {
    pub id: String,
    pub as_of_date: NaiveDate,
    /// Factual one-sentence summary.
    pub headline: String,
    pub created_at: DateTime<Utc>,
    pub status_counts: StatusCounts,
    #[serde(default)]
    pub portfolio_verdict: Option<PortfolioVerdict>,
    #[serde(default)]
    pub narrative_bullets: Option<Vec<NarrativeBullet>>,
    #[serde(default)]
    pub concentration_insights: Option<Vec<ConcentrationInsight>>,
    #[serde(default)]
    pub exec_questions: Option<Vec<String>>,
}

/// Overall direction of the portfolio this period.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PortfolioVerdict {
    pub direction: String,
    pub magnitude: String,
    pub statement: String,
    pub confidence: f64,
}

/// Prioritized talking point: 1 = requires discussion, 2 = monitor, 3 = FYI.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NarrativeBullet {
    pub priority: u8,
    pub text: String,
    #[serde(default)]
    pub supporting_tenant_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConcentrationInsight {
    pub text: String,
    #[serde(default)]
    pub affected_property_ids: Vec<String>,
    #[serde(default)]
    pub affected_tenant_ids: Vec<String>,
}
