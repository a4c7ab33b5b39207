//! Storage Adapters
//!
//! Implementations of the SubmissionRepository port.
//!
//! ## Available Adapters
//!
//! - **FileSubmissionStore** - One YAML file per submission on disk
//! - **InMemorySubmissionStore** - Submissions in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSubmissionStore, InMemorySubmissionStore};
//!
//! // Production: file-based storage
//! let store = FileSubmissionStore::new("./data/submissions");
//!
//! // Testing: in-memory storage
//! let store = InMemorySubmissionStore::new();
//! ```

mod file_submission_store;
mod in_memory_submission_store;

pub use file_submission_store::FileSubmissionStore;
pub use in_memory_submission_store::InMemorySubmissionStore;

use crate::domain::document::DocumentPath;
use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId};
use crate::domain::review::Submission;

fn not_found(id: &SubmissionId) -> DomainError {
    DomainError::new(
        ErrorCode::SubmissionNotFound,
        format!("Submission {} does not exist", id),
    )
    .with_detail("submission_id", id.to_string())
}

fn duplicate(path: &DocumentPath) -> DomainError {
    DomainError::new(
        ErrorCode::DuplicateDocument,
        format!("A submission already exists for '{}'", path),
    )
    .with_detail("path", path.as_str())
}

/// Optimistic concurrency: the incoming copy must be exactly one
/// mutation ahead of what is stored.
fn check_version(stored: &Submission, incoming: &Submission) -> Result<(), DomainError> {
    if stored.version() + 1 == incoming.version() {
        return Ok(());
    }
    Err(DomainError::new(
        ErrorCode::ConcurrencyConflict,
        format!(
            "Submission {} is at version {}, cannot write version {}",
            incoming.id(),
            stored.version(),
            incoming.version()
        ),
    )
    .with_detail("submission_id", incoming.id().to_string())
    .with_detail("stored_version", stored.version().to_string()))
}
