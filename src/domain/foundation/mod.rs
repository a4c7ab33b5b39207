//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the review workflow.

mod command;
mod document_category;
mod errors;
mod events;
mod ids;
mod review_status;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use document_category::DocumentCategory;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventMetadata, SerializableDomainEvent,
    SUBMISSION_AGGREGATE,
};
pub use ids::{DecisionId, EventId, SubmissionId, UserId, MAX_USER_ID_LENGTH};
pub use review_status::ReviewStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
