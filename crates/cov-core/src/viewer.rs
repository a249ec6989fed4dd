//! Who is looking at a brief, and what they may see.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Role of the caller a brief is built for.
///
/// Executives see the whole portfolio plus the executive layer. Asset
/// managers see only events touching their assigned properties and never
/// the executive layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Viewer {
    Executive,
    AssetManager {
        assigned_property_ids: BTreeSet<String>,
    },
}

impl Viewer {
    /// Build an asset-manager viewer from its assigned property ids.
    pub fn asset_manager<I, S>(property_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AssetManager {
            assigned_property_ids: property_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the executive layer (verdict, bullets, insights, questions)
    /// is visible.
    #[must_use]
    pub const fn sees_executive_layer(&self) -> bool {
        matches!(self, Self::Executive)
    }

    /// Whether an item touching `property_ids` is in this viewer's scope.
    ///
    /// Executives are unrestricted. Asset managers need at least one overlap.
    #[must_use]
    pub fn can_see_any<S: AsRef<str>>(&self, property_ids: &[S]) -> bool {
        match self {
            Self::Executive => true,
            Self::AssetManager {
                assigned_property_ids,
            } => property_ids
                .iter()
                .any(|id| assigned_property_ids.contains(id.as_ref())),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Executive => "exec",
            Self::AssetManager { .. } => "am",
        }
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role token a request carries, before property assignments are
/// attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleToken {
    #[default]
    Exec,
    Am,
}

impl RoleToken {
    /// Attach property assignments to produce a [`Viewer`].
    #[must_use]
    pub fn into_viewer(self, assigned_property_ids: &[String]) -> Viewer {
        match self {
            Self::Exec => Viewer::Executive,
            Self::Am => Viewer::asset_manager(assigned_property_ids.iter().cloned()),
        }
    }
}

impl FromStr for RoleToken {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exec" => Ok(Self::Exec),
            "am" => Ok(Self::Am),
            other => Err(CoreError::Validation(format!(
                "invalid role '{other}': must be 'exec' or 'am'"
            ))),
        }
    }
}
