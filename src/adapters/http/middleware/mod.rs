//! HTTP middleware for axum.
//!
//! - `actor` - Caller identity extractor

pub mod actor;

pub use actor::{Actor, ActorRejection, ACTOR_HEADER, REQUEST_ID_HEADER};
