//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, enums, errors, events)
//! - `document` - The contributed prompt file and its path rules
//! - `validation` - Naming and evidence checks run before review
//! - `review` - Submission aggregate, decisions and the review state machine

pub mod document;
pub mod foundation;
pub mod review;
pub mod validation;
