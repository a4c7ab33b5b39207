//! Submission aggregate - the pull-request analogue wrapping one document.
//!
//! # Ownership
//!
//! The Submission owns its Document exclusively, and with it the review
//! status. Mutations are `pub(crate)` and are driven only by the workflow
//! coordinator, which loads a copy, applies one mutation, and persists
//! the copy only if the mutation succeeded.
//!
//! Every successful mutation bumps `version` by one. Stores use it for
//! optimistic concurrency.

use serde::{Deserialize, Serialize};

use super::decision::ReviewDecision;
use super::errors::ReviewError;
use super::trigger::ReviewTrigger;
use crate::domain::document::{Document, DocumentPath, DocumentRevision};
use crate::domain::foundation::{
    DocumentCategory, ErrorCode, ReviewStatus, SubmissionId, Timestamp, UserId,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    id: SubmissionId,
    document: Document,
    decisions: Vec<ReviewDecision>,
    submitted_at: Option<Timestamp>,
    merged_at: Option<Timestamp>,
    version: u64,
}

impl Submission {
    /// Wraps a freshly created document in a new submission.
    pub fn open(document: Document) -> Self {
        Self {
            id: SubmissionId::new(),
            document,
            decisions: Vec::new(),
            submitted_at: None,
            merged_at: None,
            version: 1,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn status(&self) -> ReviewStatus {
        self.document.status()
    }

    pub fn category(&self) -> DocumentCategory {
        self.document.category()
    }

    pub fn author(&self) -> &UserId {
        self.document.author()
    }

    /// Decisions in the order they were recorded.
    pub fn decisions(&self) -> &[ReviewDecision] {
        &self.decisions
    }

    pub fn latest_decision(&self) -> Option<&ReviewDecision> {
        self.decisions.last()
    }

    /// When the submission first entered review.
    pub fn submitted_at(&self) -> Option<&Timestamp> {
        self.submitted_at.as_ref()
    }

    pub fn merged_at(&self) -> Option<&Timestamp> {
        self.merged_at.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Checks that `user` authored the wrapped document.
    ///
    /// # Errors
    ///
    /// - `Forbidden` for anyone else
    pub fn authorize_author(&self, user: &UserId) -> Result<(), ReviewError> {
        if self.document.is_author(user) {
            Ok(())
        } else {
            Err(ReviewError::forbidden(format!(
                "only the author may modify submission {}",
                self.id
            )))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (coordinator only)
    // ─────────────────────────────────────────────────────────────────────────

    /// Draft -> InReview. Validation is the coordinator's job.
    pub(crate) fn submit(&mut self) -> Result<(), ReviewError> {
        self.fire(ReviewTrigger::Submit)?;
        if self.submitted_at.is_none() {
            self.submitted_at = Some(*self.document.updated_at());
        }
        Ok(())
    }

    /// ChangesRequested -> InReview.
    pub(crate) fn resubmit(&mut self) -> Result<(), ReviewError> {
        self.fire(ReviewTrigger::Resubmit)
    }

    /// Applies a maintainer decision and appends it to the history.
    ///
    /// Nothing is appended if the outcome is not legal in the current state.
    pub(crate) fn record_decision(&mut self, decision: ReviewDecision) -> Result<(), ReviewError> {
        if decision.submission_id() != self.id {
            return Err(ReviewError::invalid_input(
                "submission_id",
                format!(
                    "decision belongs to {}, not {}",
                    decision.submission_id(),
                    self.id
                ),
            ));
        }

        self.fire(decision.outcome().trigger())?;
        self.decisions.push(decision);
        Ok(())
    }

    /// Approved -> Merged.
    pub(crate) fn merge(&mut self) -> Result<(), ReviewError> {
        self.fire(ReviewTrigger::Merge)?;
        self.merged_at = Some(*self.document.updated_at());
        Ok(())
    }

    /// Contributor edit of the wrapped document.
    pub(crate) fn revise(
        &mut self,
        evidence: Option<DocumentPath>,
    ) -> Result<DocumentRevision, ReviewError> {
        let status = self.status();
        let revision = self.document.revise(evidence).map_err(|e| match e.code {
            ErrorCode::DocumentLocked => ReviewError::DocumentLocked(status),
            _ => ReviewError::from(e),
        })?;
        self.version += 1;
        Ok(revision)
    }

    fn fire(&mut self, trigger: ReviewTrigger) -> Result<(), ReviewError> {
        let from = self.status();
        let to = trigger.resolve(from)?;
        self.document
            .set_status(to)
            .map_err(|_| ReviewError::InvalidTransition { from, trigger })?;
        self.version += 1;
        Ok(())
    }
}
