//! Adapters - concrete implementations of ports and transports.
//!
//! - `events` - EventPublisher implementations
//! - `http` - axum REST API
//! - `roster` - MaintainerRoster implementations
//! - `storage` - SubmissionRepository implementations

pub mod events;
pub mod http;
pub mod roster;
pub mod storage;
