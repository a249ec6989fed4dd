//! On-disk portfolio dataset consumed by the CLI.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use cov_brief::LeaseIndex;
use cov_core::entities::{
    Event, Lease, PortfolioBriefSnapshot, Property, Tenant, TenantScoreSnapshot,
};
use cov_core::errors::CoreError;
use serde::Deserialize;

/// Everything the validator and aggregator read, loaded from one JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioDataset {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub leases: Vec<Lease>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub score_snapshots: Vec<TenantScoreSnapshot>,
    #[serde(default)]
    pub brief_snapshots: Vec<PortfolioBriefSnapshot>,
}

impl PortfolioDataset {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset at {}", path.display()))?;
        let dataset: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse dataset at {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            tenants = dataset.tenants.len(),
            events = dataset.events.len(),
            briefs = dataset.brief_snapshots.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn lease_index(&self) -> LeaseIndex {
        LeaseIndex::from_leases(&self.leases)
    }

    /// Score snapshots dated exactly `date`.
    pub fn snapshots_on(&self, date: NaiveDate) -> Vec<TenantScoreSnapshot> {
        self.score_snapshots
            .iter()
            .filter(|snapshot| snapshot.as_of_date == date)
            .cloned()
            .collect()
    }

    /// The brief stored for `as_of`, or the latest brief when `as_of` is `None`.
    ///
    /// Several briefs on one date resolve to the most recently created.
    pub fn brief(&self, as_of: Option<NaiveDate>) -> anyhow::Result<&PortfolioBriefSnapshot> {
        let candidates = self
            .brief_snapshots
            .iter()
            .filter(|brief| as_of.is_none_or(|date| brief.as_of_date == date));

        candidates
            .max_by_key(|brief| (brief.as_of_date, brief.created_at))
            .with_context(|| match as_of {
                Some(date) => format!("no brief found for {date}"),
                None => "no brief found in dataset".to_string(),
            })
    }

    pub fn event(&self, event_id: &str) -> Result<&Event, CoreError> {
        self.events
            .iter()
            .find(|event| event.id == event_id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "event".to_string(),
                id: event_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    const DEMO: &str = include_str!("../../../demos/portfolio.json");

    fn demo() -> PortfolioDataset {
        serde_json::from_str(DEMO).expect("demo dataset parses")
    }

    #[test]
    fn demo_dataset_is_complete() {
        let dataset = demo();
        assert!(!dataset.tenants.is_empty());
        assert!(!dataset.events.is_empty());
        assert!(!dataset.lease_index().is_empty());
        assert!(!dataset.brief_snapshots.is_empty());
    }

    #[test]
    fn latest_brief_is_default() {
        let dataset = demo();
        let latest = dataset.brief(None).expect("a brief exists");
        let newest_date = dataset
            .brief_snapshots
            .iter()
            .map(|brief| brief.as_of_date)
            .max();
        assert_eq!(Some(latest.as_of_date), newest_date);
    }

    #[test]
    fn unknown_brief_date_is_an_error() {
        let dataset = demo();
        let err = dataset
            .brief(NaiveDate::from_ymd_opt(1999, 1, 1))
            .expect_err("no brief that early");
        assert_eq!(err.to_string(), "no brief found for 1999-01-01");
    }

    #[test]
    fn unknown_event_is_not_found() {
        let err = demo().event("missing").expect_err("no such event");
        assert!(matches!(err, CoreError::NotFound { ref id, .. } if id == "missing"));
    }

    #[test]
    fn load_reads_file_and_reports_parse_errors() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        good.write_all(br#"{"tenants": []}"#).unwrap();
        let dataset = PortfolioDataset::load(good.path()).expect("minimal dataset loads");
        assert!(dataset.events.is_empty());

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(b"{ not json").unwrap();
        let err = PortfolioDataset::load(bad.path()).expect_err("bad json");
        assert!(format!("{err:#}").contains("failed to parse dataset"));
    }
}
