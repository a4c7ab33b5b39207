//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `WorkflowCoordinator` is the single entry point the transports use.

mod coordinator;
pub mod handlers;
mod locks;

pub use coordinator::WorkflowCoordinator;
pub use handlers::{
    MergeSubmissionResult, OpenSubmissionCommand, OpenSubmissionResult, RecordDecisionResult,
    ResubmitResult, ReviseDocumentResult, SubmitForReviewResult,
};
pub use locks::SubmissionLocks;
