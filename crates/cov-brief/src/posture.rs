//! Per-band counts with their change since the previous period.

use std::cmp::Ordering;

use cov_core::entities::{StatusCounts, TenantScoreSnapshot};
use cov_core::enums::TenantStatus;

use crate::view::{DeltaDirection, PostureTile};

/// Bands shown as posture tiles, worst first.
const POSTURE_BANDS: [TenantStatus; 3] =
    [TenantStatus::Critical, TenantStatus::Watch, TenantStatus::Stable];

/// One tile per band in [`POSTURE_BANDS`], counted from live snapshots.
#[must_use]
pub fn posture_tiles(
    current: &[TenantScoreSnapshot],
    previous: &[TenantScoreSnapshot],
) -> Vec<PostureTile> {
    let now = StatusCounts::tally(current);
    let before = StatusCounts::tally(previous);

    POSTURE_BANDS
        .into_iter()
        .map(|status| {
            let count = now.get(status);
            let delta = i64::from(count) - i64::from(before.get(status));
            let delta_direction = match delta.cmp(&0) {
                Ordering::Greater => DeltaDirection::Up,
                Ordering::Less => DeltaDirection::Down,
                Ordering::Equal => DeltaDirection::Unchanged,
            };
            PostureTile {
                status,
                count,
                delta,
                delta_direction,
            }
        })
        .collect()
}
