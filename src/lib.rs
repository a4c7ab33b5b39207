//! Prompt Review - contribution and review workflow for a shared
//! collection of prompt documents.
//!
//! Contributors open submissions for prompt files, a validation gate
//! checks naming and evidence conventions, and maintainers approve or
//! request changes before a submission is merged.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
