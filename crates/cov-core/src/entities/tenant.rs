use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityType;

/// Static tenant identity. Narratives live on events, not here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub cik: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub entity_type: EntityType,
}
