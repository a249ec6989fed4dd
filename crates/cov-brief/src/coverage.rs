//! Coverage statement: how many tenants are watched and how many disclosed.

use std::collections::HashSet;

use chrono::NaiveDate;
use cov_core::entities::{Event, Tenant};

use crate::recent::RecentWindow;
use crate::view::CoverageStatement;

/// Summarise monitoring reach for the brief.
///
/// Disclosures count distinct tenants with any event inside `window`,
/// whether or not the event passes the display gate.
#[must_use]
pub fn coverage_statement(
    tenants: &[Tenant],
    events: &[Event],
    window: &RecentWindow,
    sources: &[String],
    as_of: NaiveDate,
) -> CoverageStatement {
    let disclosing: HashSet<&str> = events
        .iter()
        .filter(|event| window.contains(event.event_date))
        .map(|event| event.tenant_id.as_str())
        .collect();

    CoverageStatement {
        tenants_monitored: u32::try_from(tenants.len()).unwrap_or(u32::MAX),
        tenants_with_disclosures: u32::try_from(disclosing.len()).unwrap_or(u32::MAX),
        sources: sources.to_vec(),
        as_of_date: as_of,
    }
}
