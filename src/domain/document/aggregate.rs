//! Document record for one contributed prompt file.
//!
//! # Ownership
//!
//! A Document is always wrapped by exactly one Submission. Its status is
//! only changed through the Submission, which in turn is only driven by
//! the workflow coordinator.

use serde::{Deserialize, Serialize};

use super::value_objects::{DocumentPath, DocumentRevision};
use crate::domain::foundation::{
    DocumentCategory, DomainError, ErrorCode, ReviewStatus, StateMachine, Timestamp, UserId,
};

/// One contributed prompt file and its metadata.
///
/// # Invariants
///
/// - `category` is one of the recognized folders
/// - `status` only changes along the review state machine
/// - Merged documents cannot be edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    path: DocumentPath,
    category: DocumentCategory,
    status: ReviewStatus,
    author: UserId,
    /// Results document showing the prompt was exercised manually.
    evidence: Option<DocumentPath>,
    revision: DocumentRevision,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Document {
    /// Create a new draft document.
    ///
    /// # Errors
    ///
    /// - `InvalidCategory` if `category` is not a recognized folder
    pub fn new(path: DocumentPath, category: &str, author: UserId) -> Result<Self, DomainError> {
        let category = DocumentCategory::parse(category)?;
        let now = Timestamp::now();
        Ok(Self {
            path,
            category,
            status: ReviewStatus::Draft,
            author,
            evidence: None,
            revision: DocumentRevision::initial(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Builder: reference a results document at creation time.
    pub fn with_evidence(mut self, evidence: DocumentPath) -> Self {
        self.evidence = Some(evidence);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }

    pub fn category(&self) -> DocumentCategory {
        self.category
    }

    pub fn status(&self) -> ReviewStatus {
        self.status
    }

    pub fn author(&self) -> &UserId {
        &self.author
    }

    pub fn evidence(&self) -> Option<&DocumentPath> {
        self.evidence.as_ref()
    }

    pub fn revision(&self) -> DocumentRevision {
        self.revision
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if the given user authored this document.
    pub fn is_author(&self, user_id: &UserId) -> bool {
        &self.author == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the document to a new review status.
    ///
    /// Returns the previous status.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the state machine forbids the move
    pub(crate) fn set_status(&mut self, new_status: ReviewStatus) -> Result<ReviewStatus, DomainError> {
        let next = self.status.transition_to(new_status)?;

        let previous = std::mem::replace(&mut self.status, next);
        self.updated_at = Timestamp::now();
        Ok(previous)
    }

    /// Records a contributor edit, replacing the evidence reference.
    ///
    /// Returns the new revision.
    ///
    /// # Errors
    ///
    /// - `DocumentLocked` unless the document is in Draft or ChangesRequested
    pub fn revise(&mut self, evidence: Option<DocumentPath>) -> Result<DocumentRevision, DomainError> {
        if !self.status.is_editable() {
            return Err(DomainError::new(
                ErrorCode::DocumentLocked,
                format!("Document cannot be edited while {}", self.status),
            )
            .with_detail("status", self.status.to_string()));
        }

        self.evidence = evidence;
        self.revision = self.revision.next();
        self.updated_at = Timestamp::now();
        Ok(self.revision)
    }
}
