//! # cov-grounding
//!
//! Structural grounding checks for event memos.
//!
//! The validator never judges whether a fact is true. It checks that a memo
//! is *anchored*: evidence is attached, SEC events carry tier-1 SEC
//! evidence, cited evidence exists, quoted passages can be found in the
//! cited document, and the disclosure avoids hedging language.
//!
//! Three entry points on [`GroundingValidator`]:
//! - [`GroundingValidator::validate_citations`]: citation and evidence rules only
//! - [`GroundingValidator::validate_memo`]: hedging and length rules plus citations
//! - [`GroundingValidator::is_valid_for_display`]: the cheap gate used before
//!   an event reaches a viewer, honouring any cached verdict
//!
//! Rule violations are reported as data in [`CitationResult`] and
//! [`MemoResult`]; nothing in this crate returns an error or panics on
//! malformed optional memo fields.

mod citation;
mod memo;
mod rules;
pub mod text;
mod validator;

pub use citation::CitationResult;
pub use memo::MemoResult;
pub use rules::{GroundingRules, HEDGING_MARKERS, MAX_DISCLOSURE_CHARS};
pub use validator::GroundingValidator;
