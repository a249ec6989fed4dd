use std::collections::HashMap;

use cov_core::entities::Lease;

/// Read-only join between tenants and the properties they lease.
///
/// Both directions keep first-seen order and hold each pair once, however
/// many suites a tenant occupies at one property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaseIndex {
    by_tenant: HashMap<String, Vec<String>>,
    by_property: HashMap<String, Vec<String>>,
}

impl LeaseIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every lease in `leases`.
    pub fn from_leases<'a, I>(leases: I) -> Self
    where
        I: IntoIterator<Item = &'a Lease>,
    {
        let mut index = Self::new();
        for lease in leases {
            index.insert(&lease.tenant_id, &lease.property_id);
        }
        index
    }

    /// Record that `tenant_id` leases space at `property_id`.
    pub fn insert(&mut self, tenant_id: &str, property_id: &str) {
        let properties = self.by_tenant.entry(tenant_id.to_string()).or_default();
        if !properties.iter().any(|id| id == property_id) {
            properties.push(property_id.to_string());
        }
        let tenants = self.by_property.entry(property_id.to_string()).or_default();
        if !tenants.iter().any(|id| id == tenant_id) {
            tenants.push(tenant_id.to_string());
        }
    }

    /// Properties leased by a tenant; empty when it has no leases.
    #[must_use]
    pub fn property_ids(&self, tenant_id: &str) -> &[String] {
        self.by_tenant.get(tenant_id).map_or(&[][..], Vec::as_slice)
    }

    /// Tenants leasing at a property; empty when it has no leases.
    #[must_use]
    pub fn tenant_ids(&self, property_id: &str) -> &[String] {
        self.by_property.get(property_id).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_tenant.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lease(id: &str, tenant: &str, property: &str) -> Lease {
        Lease {
            id: id.into(),
            tenant_id: tenant.into(),
            property_id: property.into(),
            suite_label: None,
            rent_share_estimate: None,
        }
    }

    #[test]
    fn indexes_both_directions_without_duplicates() {
        let leases = vec![
            lease("l1", "T1", "P1"),
            lease("l2", "T1", "P2"),
            lease("l3", "T1", "P1"),
            lease("l4", "T2", "P1"),
        ];
        let index = LeaseIndex::from_leases(&leases);
        assert_eq!(index.property_ids("T1"), ["P1", "P2"]);
        assert_eq!(index.tenant_ids("P1"), ["T1", "T2"]);
        assert_eq!(index.tenant_ids("P2"), ["T1"]);
    }

    #[test]
    fn unknown_ids_resolve_to_nothing() {
        let index = LeaseIndex::new();
        assert!(index.is_empty());
        assert!(index.property_ids("T9").is_empty());
        assert!(index.tenant_ids("P9").is_empty());
    }
}
