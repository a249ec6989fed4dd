use cov_core::entities::{Event, PortfolioBriefSnapshot, Property, Tenant, TenantScoreSnapshot};
use cov_core::viewer::Viewer;
use cov_grounding::GroundingValidator;

use crate::attention::rank_properties;
use crate::coverage::coverage_statement;
use crate::lease_index::LeaseIndex;
use crate::posture::posture_tiles;
use crate::recent::{Directory, RecentWindow, select_recent_events};
use crate::transitions::{latest_event_by_tenant, status_changes};
use crate::view::BriefView;

/// Default trailing window for recent events, in days.
const fn default_window_days() -> u32 {
    7
}

/// Default cap on recent events.
const fn default_event_limit() -> usize {
    7
}

/// Tunables for brief assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefSettings {
    pub recent_window_days: u32,
    pub recent_event_limit: usize,
    /// Source labels echoed in the coverage statement.
    pub coverage_sources: Vec<String>,
}

impl Default for BriefSettings {
    fn default() -> Self {
        Self {
            recent_window_days: default_window_days(),
            recent_event_limit: default_event_limit(),
            coverage_sources: ["SEC EDGAR", "Reuters", "Court Records"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Everything a brief is built from, borrowed from the caller.
///
/// `current` and `previous` hold at most one snapshot per tenant. `events`
/// is the candidate pool for the recent list and the source of each
/// tenant's latest event; callers over-fetch so enough candidates survive
/// filtering.
#[derive(Debug, Clone, Copy)]
pub struct BriefInputs<'a> {
    pub snapshot: &'a PortfolioBriefSnapshot,
    pub current: &'a [TenantScoreSnapshot],
    pub previous: &'a [TenantScoreSnapshot],
    pub tenants: &'a [Tenant],
    pub events: &'a [Event],
    /// All properties, in listing order.
    pub properties: &'a [Property],
    pub leases: &'a LeaseIndex,
}

/// Assembles [`BriefView`]s.
#[derive(Debug, Clone, Default)]
pub struct BriefAggregator {
    validator: GroundingValidator,
    settings: BriefSettings,
}

impl BriefAggregator {
    #[must_use]
    pub const fn new(validator: GroundingValidator, settings: BriefSettings) -> Self {
        Self {
            validator,
            settings,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &BriefSettings {
        &self.settings
    }

    /// Build the brief for `inputs.snapshot.as_of_date` as seen by `viewer`.
    ///
    /// Status counts come from the stored snapshot; transitions, recent
    /// events, attention ranking, posture and coverage are recomputed. The
    /// executive layer is copied only for executives.
    #[must_use]
    pub fn build(&self, inputs: &BriefInputs<'_>, viewer: &Viewer) -> BriefView {
        let snapshot = inputs.snapshot;
        let as_of = snapshot.as_of_date;
        let window = RecentWindow {
            as_of,
            days: self.settings.recent_window_days,
            limit: self.settings.recent_event_limit,
        };
        let directory = Directory::new(inputs.tenants, inputs.properties);
        let latest_events = latest_event_by_tenant(inputs.events);

        let status_changes = status_changes(
            inputs.current,
            inputs.previous,
            directory.tenant_names(),
            &latest_events,
        );
        let recent_events = select_recent_events(
            inputs.events,
            &window,
            &self.validator,
            inputs.leases,
            &directory,
            viewer,
        );
        let properties_attention =
            rank_properties(inputs.properties, inputs.current, as_of, inputs.leases);
        let coverage = coverage_statement(
            inputs.tenants,
            inputs.events,
            &window,
            &self.settings.coverage_sources,
            as_of,
        );
        let posture = posture_tiles(inputs.current, inputs.previous);

        tracing::debug!(
            brief_id = %snapshot.id,
            %as_of,
            %viewer,
            to_watch_or_critical = status_changes.to_watch_or_critical.len(),
            to_improving = status_changes.to_improving.len(),
            unchanged = status_changes.unchanged,
            recent_events = recent_events.len(),
            "brief built"
        );

        let exec = viewer.sees_executive_layer();
        BriefView {
            id: snapshot.id.clone(),
            as_of_date: as_of,
            headline: snapshot.headline.clone(),
            updated_at: snapshot.created_at,
            status_counts: snapshot.status_counts,
            status_changes,
            recent_events,
            properties_attention,
            coverage,
            posture,
            portfolio_verdict: exec.then(|| snapshot.portfolio_verdict.clone()).flatten(),
            narrative_bullets: exec.then(|| snapshot.narrative_bullets.clone()).flatten(),
            concentration_insights: exec.then(|| snapshot.concentration_insights.clone()).flatten(),
            exec_questions: exec.then(|| snapshot.exec_questions.clone()).flatten(),
        }
    }
}
