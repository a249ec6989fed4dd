//! Status bands, event and source types, and evidence tiers for Covenant.
//!
//! All string enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the same representation. [`EvidenceTier`] is the
//! exception: it travels as the bare integer `1`, `2` or `3`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TenantStatus
// ---------------------------------------------------------------------------

/// Credit status band of a tenant at a point in time.
///
/// Severity for worst-case rollups:
///
/// ```text
/// critical > watch > improving > stable
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    Critical,
    Watch,
    Stable,
    Improving,
}

impl TenantStatus {
    /// Every status band, in severity order (worst first).
    pub const ALL: [Self; 4] = [Self::Critical, Self::Watch, Self::Improving, Self::Stable];

    /// Whether the status sits in a flagged band (critical or watch).
    #[must_use]
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Critical | Self::Watch)
    }

    /// Rank used to pick the worst status among several; higher is worse.
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::Watch => 2,
            Self::Improving => 1,
            Self::Stable => 0,
        }
    }

    /// The more severe of two statuses.
    #[must_use]
    pub const fn worst(self, other: Self) -> Self {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Watch => "watch",
            Self::Stable => "stable",
            Self::Improving => "improving",
        }
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// Kind of material disclosure an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    SecFiling,
    News,
    CourtFiling,
    PressRelease,
    CreditReport,
}

impl EventType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SecFiling => "sec_filing",
            Self::News => "news",
            Self::CourtFiling => "court_filing",
            Self::PressRelease => "press_release",
            Self::CreditReport => "credit_report",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceType
// ---------------------------------------------------------------------------

/// Kind of document an evidence source is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    SecFiling,
    News,
    PressRelease,
    CourtFiling,
    CreditReport,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SecFiling => "sec_filing",
            Self::News => "news",
            Self::PressRelease => "press_release",
            Self::CourtFiling => "court_filing",
            Self::CreditReport => "credit_report",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EvidenceTier
// ---------------------------------------------------------------------------

/// Credibility rank of an evidence source.
///
/// Ordering follows the numeric tier, so sorting ascending puts primary
/// sources first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EvidenceTier {
    /// Tier 1: SEC filings and other primary/regulatory documents.
    Primary,
    /// Tier 2: major press.
    MajorPress,
    /// Tier 3: everything else.
    Other,
}

impl EvidenceTier {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::MajorPress => 2,
            Self::Other => 3,
        }
    }

    /// Tier 1 or 2.
    #[must_use]
    pub const fn supports_severity(self) -> bool {
        matches!(self, Self::Primary | Self::MajorPress)
    }
}

impl TryFrom<u8> for EvidenceTier {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Primary),
            2 => Ok(Self::MajorPress),
            3 => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "evidence tier must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

impl From<EvidenceTier> for u8 {
    fn from(tier: EvidenceTier) -> Self {
        tier.as_u8()
    }
}

impl fmt::Display for EvidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {}", self.as_u8())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Whether a tenant is publicly listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Public,
    #[default]
    Private,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
