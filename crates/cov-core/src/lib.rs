//! # cov-core
//!
//! Core types and error types for Covenant.
//!
//! This crate provides the foundational types shared across all Covenant crates:
//! - Entity structs for the portfolio domain (tenants, properties, leases, events, evidence)
//! - Point-in-time snapshots (tenant status, portfolio brief with its executive layer)
//! - Status, event-type, source-type and evidence-tier enums
//! - The viewer role that scopes what a brief exposes
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
mod lenient;
pub mod viewer;
