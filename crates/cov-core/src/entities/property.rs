use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A physical asset in the portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    /// Retail, Office, Industrial, etc.
    pub asset_class: String,
}

/// Links a tenant to a property. A tenant may hold several leases at the
/// same property (one per suite).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Lease {
    pub id: String,
    pub tenant_id: String,
    pub property_id: String,
    /// "Suite 100", "Anchor", ...
    #[serde(default)]
    pub suite_label: Option<String>,
    /// Estimated share of the property's rent, in `[0, 1]`.
    #[serde(default)]
    pub rent_share_estimate: Option<f64>,
}
