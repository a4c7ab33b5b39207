//! Submission repository port.
//!
//! Defines the contract for persisting and retrieving Submission
//! aggregates. Adapters handle the actual storage.

use async_trait::async_trait;

use crate::domain::document::DocumentPath;
use crate::domain::foundation::{DocumentCategory, DomainError, SubmissionId};
use crate::domain::review::Submission;

/// Repository port for Submission aggregate persistence.
///
/// Implementations must ensure:
/// - At most one submission per document path
/// - `update` only succeeds when the stored version is exactly one
///   behind the incoming one
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Save a new submission.
    ///
    /// # Errors
    ///
    /// - `DuplicateDocument` if a submission for the same path exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, submission: &Submission) -> Result<(), DomainError>;

    /// Update an existing submission.
    ///
    /// # Errors
    ///
    /// - `SubmissionNotFound` if the submission doesn't exist
    /// - `ConcurrencyConflict` if another writer got there first
    /// - `DatabaseError` on persistence failure
    async fn update(&self, submission: &Submission) -> Result<(), DomainError>;

    /// Find a submission by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<Submission>, DomainError>;

    /// Find the submission wrapping the document at `path`.
    async fn find_by_path(&self, path: &DocumentPath) -> Result<Option<Submission>, DomainError>;

    /// All submissions in a category, ordered by document path.
    async fn list_by_category(
        &self,
        category: DocumentCategory,
    ) -> Result<Vec<Submission>, DomainError>;
}
