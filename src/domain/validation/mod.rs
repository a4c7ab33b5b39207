//! Validation module - conformance checks a document must pass before
//! it can enter review.
//!
//! The gate inspects file naming (case, characters, suffix, descriptive
//! stem, category folder) and the evidence reference. It never touches
//! storage, so it can be run as a dry run at any time.

mod gate;
mod policy;

pub use gate::{ValidationGate, ValidationResult, Violation, ViolationRule};
pub use policy::{
    NamingPolicy, DEFAULT_EVIDENCE_SUFFIXES, DEFAULT_MIN_NAME_SEGMENTS, DEFAULT_PROMPT_SUFFIXES,
};
