//! # cov-brief
//!
//! Builds the weekly executive brief from already-loaded portfolio data.
//!
//! Everything here is a pure function of its inputs:
//! - [`transitions`] partitions tenants into moved-to-flagged, moved-to-improving
//!   and unchanged
//! - [`recent`] selects the displayable events of the last window, scoped to
//!   the viewer's properties
//! - [`attention`] ranks properties by how many of their tenants are flagged
//! - [`posture`] and [`coverage`] summarise counts and monitoring reach
//! - [`BriefAggregator`] stitches these into a role-gated [`view::BriefView`]
//!
//! Joins from events to properties go through a [`LeaseIndex`] supplied by the
//! caller, so no storage concern leaks in.

mod aggregator;
pub mod attention;
pub mod coverage;
mod lease_index;
pub mod posture;
pub mod recent;
pub mod transitions;
pub mod view;

pub use aggregator::{BriefAggregator, BriefInputs, BriefSettings};
pub use lease_index::LeaseIndex;
