//! Period-over-period status transitions.

use std::collections::HashMap;

use cov_core::entities::{Event, TenantScoreSnapshot};
use cov_core::enums::TenantStatus;

use crate::view::{StatusChangeItem, StatusChanges};

/// Each tenant's most recent event by date.
///
/// Ties keep the event that appears first in `events`.
#[must_use]
pub fn latest_event_by_tenant(events: &[Event]) -> HashMap<&str, &Event> {
    let mut latest: HashMap<&str, &Event> = HashMap::new();
    for event in events {
        latest
            .entry(event.tenant_id.as_str())
            .and_modify(|current| {
                if event.event_date > current.event_date {
                    *current = event;
                }
            })
            .or_insert(event);
    }
    latest
}

/// Partition `current` into tenants that moved into a flagged band, moved
/// into improving, or neither.
///
/// A tenant without a previous snapshot counts as unchanged whatever its
/// current status. `tenant_names` and `latest_events` only decorate the
/// change records; a tenant missing from `tenant_names` is reported under
/// its id.
#[must_use]
pub fn status_changes(
    current: &[TenantScoreSnapshot],
    previous: &[TenantScoreSnapshot],
    tenant_names: &HashMap<&str, &str>,
    latest_events: &HashMap<&str, &Event>,
) -> StatusChanges {
    let previous_by_tenant: HashMap<&str, TenantStatus> = previous
        .iter()
        .map(|snapshot| (snapshot.tenant_id.as_str(), snapshot.status))
        .collect();

    let mut changes = StatusChanges::default();
    for snapshot in current {
        let Some(&before) = previous_by_tenant.get(snapshot.tenant_id.as_str()) else {
            changes.unchanged += 1;
            continue;
        };
        let now = snapshot.status;

        if now.is_flagged() && !before.is_flagged() {
            changes
                .to_watch_or_critical
                .push(change_item(snapshot, before, tenant_names, latest_events));
        } else if now == TenantStatus::Improving && before != TenantStatus::Improving {
            changes
                .to_improving
                .push(change_item(snapshot, before, tenant_names, latest_events));
        } else {
            changes.unchanged += 1;
        }
    }
    changes
}

fn change_item(
    snapshot: &TenantScoreSnapshot,
    before: TenantStatus,
    tenant_names: &HashMap<&str, &str>,
    latest_events: &HashMap<&str, &Event>,
) -> StatusChangeItem {
    let tenant_id = snapshot.tenant_id.as_str();
    let tenant_name = tenant_names.get(tenant_id).copied().unwrap_or_else(|| {
        tracing::debug!(tenant_id, "status change for unknown tenant; using id as name");
        tenant_id
    });
    let latest = latest_events.get(tenant_id);

    StatusChangeItem {
        tenant_id: tenant_id.to_string(),
        tenant_name: tenant_name.to_string(),
        previous_status: before,
        new_status: snapshot.status,
        event_id: latest.map(|event| event.id.clone()),
        event_headline: latest.map(|event| event.headline.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cov_core::entities::Validity;
    use cov_core::enums::EventType;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn snap(tenant: &str, status: TenantStatus) -> TenantScoreSnapshot {
        TenantScoreSnapshot {
            tenant_id: tenant.into(),
            as_of_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            status,
            score: None,
        }
    }

    fn event(id: &str, tenant: &str, day: u32) -> Event {
        Event {
            id: id.into(),
            tenant_id: tenant.into(),
            event_type: EventType::News,
            event_date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            headline: format!("headline {id}"),
            memo: None,
            evidence: vec![],
            validity: Validity::Unevaluated,
        }
    }

    fn classify(before: TenantStatus, now: TenantStatus) -> (usize, usize, u32) {
        let changes = status_changes(
            &[snap("T1", now)],
            &[snap("T1", before)],
            &HashMap::new(),
            &HashMap::new(),
        );
        (
            changes.to_watch_or_critical.len(),
            changes.to_improving.len(),
            changes.unchanged,
        )
    }

    #[rstest]
    #[case(TenantStatus::Stable, TenantStatus::Watch, (1, 0, 0))]
    #[case(TenantStatus::Improving, TenantStatus::Critical, (1, 0, 0))]
    #[case(TenantStatus::Watch, TenantStatus::Critical, (0, 0, 1))]
    #[case(TenantStatus::Critical, TenantStatus::Watch, (0, 0, 1))]
    #[case(TenantStatus::Critical, TenantStatus::Improving, (0, 1, 0))]
    #[case(TenantStatus::Stable, TenantStatus::Improving, (0, 1, 0))]
    #[case(TenantStatus::Improving, TenantStatus::Improving, (0, 0, 1))]
    #[case(TenantStatus::Watch, TenantStatus::Stable, (0, 0, 1))]
    #[case(TenantStatus::Stable, TenantStatus::Stable, (0, 0, 1))]
    fn classifies_each_transition(
        #[case] before: TenantStatus,
        #[case] now: TenantStatus,
        #[case] expected: (usize, usize, u32),
    ) {
        assert_eq!(classify(before, now), expected);
    }

    #[test]
    fn newcomer_is_unchanged_even_when_critical() {
        let changes = status_changes(
            &[snap("NEW", TenantStatus::Critical)],
            &[snap("OLD", TenantStatus::Stable)],
            &HashMap::new(),
            &HashMap::new(),
        );
        assert!(changes.to_watch_or_critical.is_empty());
        assert_eq!(changes.unchanged, 1);
    }

    #[test]
    fn partition_covers_every_current_tenant() {
        let current = vec![
            snap("A", TenantStatus::Critical),
            snap("B", TenantStatus::Improving),
            snap("C", TenantStatus::Stable),
            snap("D", TenantStatus::Watch),
            snap("E", TenantStatus::Watch),
        ];
        let previous = vec![
            snap("A", TenantStatus::Stable),
            snap("B", TenantStatus::Watch),
            snap("C", TenantStatus::Stable),
            snap("D", TenantStatus::Critical),
        ];
        let changes = status_changes(&current, &previous, &HashMap::new(), &HashMap::new());
        assert_eq!(changes.total(), current.len());
        assert_eq!(changes.to_watch_or_critical.len(), 1);
        assert_eq!(changes.to_improving.len(), 1);
        assert_eq!(changes.unchanged, 3);
    }

    #[test]
    fn change_records_carry_name_and_latest_event() {
        let events = vec![
            event("e-old", "T1", 2),
            event("e-new", "T1", 9),
            event("e-tie", "T1", 9),
        ];
        let latest = latest_event_by_tenant(&events);
        let names = HashMap::from([("T1", "Acme Retail")]);

        let changes = status_changes(
            &[snap("T1", TenantStatus::Watch), snap("T2", TenantStatus::Improving)],
            &[snap("T1", TenantStatus::Stable), snap("T2", TenantStatus::Stable)],
            &names,
            &latest,
        );

        assert_eq!(
            changes.to_watch_or_critical,
            vec![StatusChangeItem {
                tenant_id: "T1".into(),
                tenant_name: "Acme Retail".into(),
                previous_status: TenantStatus::Stable,
                new_status: TenantStatus::Watch,
                event_id: Some("e-new".into()),
                event_headline: Some("headline e-new".into()),
            }]
        );
        assert_eq!(
            changes.to_improving,
            vec![StatusChangeItem {
                tenant_id: "T2".into(),
                tenant_name: "T2".into(),
                previous_status: TenantStatus::Stable,
                new_status: TenantStatus::Improving,
                event_id: None,
                event_headline: None,
            }]
        );
    }
}
