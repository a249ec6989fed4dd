//! Viewer scoping for the CLI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessConfig {
    /// Properties assigned to the asset-manager role.
    #[serde(default)]
    pub asset_manager_property_ids: Vec<String>,
}

impl AccessConfig {
    /// Whether any property is assigned to the asset-manager role.
    #[must_use]
    pub fn has_assignment(&self) -> bool {
        !self.asset_manager_property_ids.is_empty()
    }
}
