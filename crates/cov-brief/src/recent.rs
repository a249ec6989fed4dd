//! Selection of the recent events shown in a brief.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use cov_core::entities::{Event, Property, Tenant};
use cov_core::viewer::Viewer;
use cov_grounding::GroundingValidator;

use crate::lease_index::LeaseIndex;
use crate::view::{EventView, PropertyBadge};

/// The trailing date range and size cap of the recent-events list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentWindow {
    pub as_of: NaiveDate,
    pub days: u32,
    pub limit: usize,
}

impl RecentWindow {
    /// First date inside the window.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.as_of
            .checked_sub_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Whether `date` falls in `[as_of - days, as_of]`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.as_of
    }
}

/// Name lookups for decorating views.
#[derive(Debug, Clone, Default)]
pub struct Directory<'a> {
    tenant_names: HashMap<&'a str, &'a str>,
    properties: HashMap<&'a str, &'a Property>,
}

impl<'a> Directory<'a> {
    #[must_use]
    pub fn new(tenants: &'a [Tenant], properties: &'a [Property]) -> Self {
        Self {
            tenant_names: tenants
                .iter()
                .map(|tenant| (tenant.id.as_str(), tenant.name.as_str()))
                .collect(),
            properties: properties
                .iter()
                .map(|property| (property.id.as_str(), property))
                .collect(),
        }
    }

    #[must_use]
    pub const fn tenant_names(&self) -> &HashMap<&'a str, &'a str> {
        &self.tenant_names
    }

    /// Tenant display name, falling back to the id.
    #[must_use]
    pub fn tenant_name<'s>(&'s self, tenant_id: &'s str) -> &'s str {
        self.tenant_names.get(tenant_id).copied().unwrap_or(tenant_id)
    }

    #[must_use]
    pub fn property(&self, property_id: &str) -> Option<&'a Property> {
        self.properties.get(property_id).copied()
    }
}

/// Pick up to `window.limit` displayable events from `events`, newest first.
///
/// Events outside the window, failing the display gate, or touching none
/// of the viewer's properties are dropped without replacement. Events of
/// the same date keep their input order.
#[must_use]
pub fn select_recent_events(
    events: &[Event],
    window: &RecentWindow,
    validator: &GroundingValidator,
    leases: &LeaseIndex,
    directory: &Directory<'_>,
    viewer: &Viewer,
) -> Vec<EventView> {
    let mut candidates: Vec<&Event> = events
        .iter()
        .filter(|event| window.contains(event.event_date))
        .collect();
    candidates.sort_by(|a, b| b.event_date.cmp(&a.event_date));

    let mut selected = Vec::with_capacity(window.limit.min(candidates.len()));
    for event in candidates {
        if selected.len() >= window.limit {
            break;
        }

        if !validator.is_valid_for_display(event) {
            tracing::debug!(event_id = %event.id, "recent events: dropped, not valid for display");
            continue;
        }

        let property_ids = leases.property_ids(&event.tenant_id);
        if !viewer.can_see_any(property_ids) {
            tracing::debug!(event_id = %event.id, viewer = %viewer, "recent events: dropped, outside viewer scope");
            continue;
        }

        selected.push(event_view(event, property_ids, directory));
    }
    selected
}

fn event_view(event: &Event, property_ids: &[String], directory: &Directory<'_>) -> EventView {
    let properties = property_ids
        .iter()
        .filter_map(|id| directory.property(id))
        .map(|property| PropertyBadge {
            id: property.id.clone(),
            name: property.name.clone(),
        })
        .collect();

    EventView {
        id: event.id.clone(),
        tenant_id: event.tenant_id.clone(),
        tenant_name: directory.tenant_name(&event.tenant_id).to_string(),
        event_type: event.event_type,
        event_date: event.event_date,
        headline: event.headline.clone(),
        summary: event.summary().to_string(),
        evidence_count: u32::try_from(event.evidence.len()).unwrap_or(u32::MAX),
        properties,
    }
}
