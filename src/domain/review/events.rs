//! Submission domain events.
//!
//! Published by the workflow coordinator after each successful save.

use serde::{Deserialize, Serialize};

use super::decision::ReviewOutcome;
use crate::domain::foundation::{
    domain_event, DecisionId, DocumentCategory, EventId, ReviewStatus, SubmissionId, Timestamp,
    UserId,
};

/// A contributor opened a new submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionOpened {
    pub event_id: EventId,
    pub submission_id: SubmissionId,
    pub path: String,
    pub category: DocumentCategory,
    pub author: UserId,
    pub has_evidence: bool,
    pub opened_at: Timestamp,
}

domain_event!(SubmissionOpened, "submission.opened.v1", occurred_at = opened_at);

/// A draft passed validation and entered review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSubmitted {
    pub event_id: EventId,
    pub submission_id: SubmissionId,
    pub path: String,
    pub submitted_by: UserId,
    pub submitted_at: Timestamp,
}

domain_event!(SubmissionSubmitted, "submission.submitted.v1", occurred_at = submitted_at);

/// A submission went back into review after requested changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResubmitted {
    pub event_id: EventId,
    pub submission_id: SubmissionId,
    pub resubmitted_by: UserId,
    /// Number of decisions recorded so far.
    pub review_round: usize,
    pub resubmitted_at: Timestamp,
}

domain_event!(SubmissionResubmitted, "submission.resubmitted.v1", occurred_at = resubmitted_at);

/// A maintainer approved or requested changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDecisionRecorded {
    pub event_id: EventId,
    pub submission_id: SubmissionId,
    pub decision_id: DecisionId,
    pub outcome: ReviewOutcome,
    pub reviewer: UserId,
    pub new_status: ReviewStatus,
    pub decided_at: Timestamp,
}

domain_event!(ReviewDecisionRecorded, "submission.decision_recorded.v1", occurred_at = decided_at);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionMerged {
    pub event_id: EventId,
    pub submission_id: SubmissionId,
    pub path: String,
    pub category: DocumentCategory,
    pub merged_by: UserId,
    pub merged_at: Timestamp,
}

domain_event!(SubmissionMerged, "submission.merged.v1", occurred_at = merged_at);

/// The author edited the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRevised {
    pub event_id: EventId,
    pub submission_id: SubmissionId,
    pub revision: u32,
    pub evidence: Option<String>,
    pub revised_at: Timestamp,
}

domain_event!(DocumentRevised, "submission.revised.v1", occurred_at = revised_at);
