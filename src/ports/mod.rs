//! Ports - interfaces the workflow depends on.
//!
//! Adapters in `crate::adapters` provide the implementations.

mod event_publisher;
mod maintainer_roster;
mod submission_repository;

pub use event_publisher::EventPublisher;
pub use maintainer_roster::MaintainerRoster;
pub use submission_repository::SubmissionRepository;
