//! Property attention ranking.

use std::collections::HashMap;

use chrono::NaiveDate;
use cov_core::entities::{Property, TenantScoreSnapshot};
use cov_core::enums::TenantStatus;

use crate::lease_index::LeaseIndex;
use crate::view::PropertyAttention;

/// Rank properties by the number of their tenants in a flagged band.
///
/// Only snapshots dated `as_of` are considered. A property's status is the
/// worst among its tenants (`stable` when none has a snapshot). Ties keep
/// the order of `properties`.
#[must_use]
pub fn rank_properties(
    properties: &[Property],
    current: &[TenantScoreSnapshot],
    as_of: NaiveDate,
    leases: &LeaseIndex,
) -> Vec<PropertyAttention> {
    let status_by_tenant: HashMap<&str, TenantStatus> = current
        .iter()
        .filter(|snapshot| snapshot.as_of_date == as_of)
        .map(|snapshot| (snapshot.tenant_id.as_str(), snapshot.status))
        .collect();

    let mut ranked: Vec<PropertyAttention> = properties
        .iter()
        .map(|property| {
            let tenants = leases.tenant_ids(&property.id);
            let statuses = tenants
                .iter()
                .filter_map(|tenant_id| status_by_tenant.get(tenant_id.as_str()).copied());

            let mut status = TenantStatus::Stable;
            let mut issues = 0u32;
            for tenant_status in statuses {
                status = status.worst(tenant_status);
                if tenant_status.is_flagged() {
                    issues += 1;
                }
            }

            PropertyAttention {
                id: property.id.clone(),
                name: property.name.clone(),
                city: property.city.clone(),
                state: property.state.clone(),
                status,
                issues_count: issues,
                tenant_count: u32::try_from(tenants.len()).unwrap_or(u32::MAX),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.issues_count.cmp(&a.issues_count));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn property(id: &str) -> Property {
        Property {
            id: id.into(),
            name: format!("{id} Plaza"),
            city: "Austin".into(),
            state: "TX".into(),
            asset_class: "Retail".into(),
        }
    }

    fn snap(tenant: &str, status: TenantStatus) -> TenantScoreSnapshot {
        TenantScoreSnapshot {
            tenant_id: tenant.into(),
            as_of_date: as_of(),
            status,
            score: None,
        }
    }

    fn summary(ranked: &[PropertyAttention]) -> Vec<(&str, TenantStatus, u32)> {
        ranked
            .iter()
            .map(|p| (p.id.as_str(), p.status, p.issues_count))
            .collect()
    }

    #[test]
    fn issue_count_drives_order_not_severity() {
        let mut leases = LeaseIndex::new();
        leases.insert("T1", "P1");
        leases.insert("T2", "P2");
        leases.insert("T3", "P2");
        leases.insert("T4", "P3");
        leases.insert("T5", "P3");
        let current = vec![
            snap("T1", TenantStatus::Critical),
            snap("T2", TenantStatus::Watch),
            snap("T3", TenantStatus::Watch),
            snap("T4", TenantStatus::Stable),
            snap("T5", TenantStatus::Stable),
        ];

        let ranked = rank_properties(
            &[property("P1"), property("P2"), property("P3")],
            &current,
            as_of(),
            &leases,
        );
        assert_eq!(
            summary(&ranked),
            vec![
                ("P2", TenantStatus::Watch, 2),
                ("P1", TenantStatus::Critical, 1),
                ("P3", TenantStatus::Stable, 0),
            ]
        );
    }

    #[test]
    fn improving_only_when_nothing_worse() {
        let mut leases = LeaseIndex::new();
        leases.insert("T1", "P1");
        leases.insert("T2", "P1");
        leases.insert("T3", "P2");
        leases.insert("T4", "P2");
        let current = vec![
            snap("T1", TenantStatus::Improving),
            snap("T2", TenantStatus::Stable),
            snap("T3", TenantStatus::Improving),
            snap("T4", TenantStatus::Watch),
        ];

        let ranked = rank_properties(&[property("P1"), property("P2")], &current, as_of(), &leases);
        assert_eq!(
            summary(&ranked),
            vec![
                ("P2", TenantStatus::Watch, 1),
                ("P1", TenantStatus::Improving, 0),
            ]
        );
    }

    #[test]
    fn ties_keep_listing_order_and_missing_data_is_stable() {
        let mut leases = LeaseIndex::new();
        leases.insert("T1", "B");
        leases.insert("T2", "C");
        let stale = TenantScoreSnapshot {
            as_of_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            ..snap("T2", TenantStatus::Critical)
        };

        let ranked = rank_properties(
            &[property("A"), property("B"), property("C")],
            &[stale],
            as_of(),
            &leases,
        );
        assert_eq!(
            summary(&ranked),
            vec![
                ("A", TenantStatus::Stable, 0),
                ("B", TenantStatus::Stable, 0),
                ("C", TenantStatus::Stable, 0),
            ]
        );
        assert_eq!(ranked[0].tenant_count, 0);
        assert_eq!(ranked[2].tenant_count, 1);
    }
}
