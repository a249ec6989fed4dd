//! Entity structs for the Covenant portfolio domain.
//!
//! Entities are read-only value views of rows owned by the surrounding store.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod event;
mod evidence;
mod property;
mod snapshot;
mod tenant;

pub use event::{Event, EventMemo, KeyDetail, Validity};
pub use evidence::EvidenceSource;
pub use property::{Lease, Property};
pub use snapshot::{
    ConcentrationInsight, NarrativeBullet, PortfolioBriefSnapshot, PortfolioVerdict,
    StatusCounts, TenantScoreSnapshot,
};
pub use tenant::Tenant;
