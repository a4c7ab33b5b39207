//! Review decisions recorded by maintainers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::trigger::ReviewTrigger;
use crate::domain::foundation::{DecisionId, SubmissionId, Timestamp, UserId, ValidationError};

/// Maximum length of a review comment, in characters.
pub const MAX_COMMENT_LENGTH: usize = 10_000;

/// What a maintainer decided about a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    Approve,
    RequestChanges,
}

impl ReviewOutcome {
    /// The trigger this outcome fires on the review state machine.
    pub fn trigger(&self) -> ReviewTrigger {
        match self {
            ReviewOutcome::Approve => ReviewTrigger::Approve,
            ReviewOutcome::RequestChanges => ReviewTrigger::RequestChanges,
        }
    }
}

impl fmt::Display for ReviewOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewOutcome::Approve => write!(f, "approve"),
            ReviewOutcome::RequestChanges => write!(f, "request_changes"),
        }
    }
}

/// One maintainer evaluation. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDecision {
    id: DecisionId,
    submission_id: SubmissionId,
    outcome: ReviewOutcome,
    reviewer: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    decided_at: Timestamp,
}

impl ReviewDecision {
    /// Creates a decision. Blank comments are dropped.
    ///
    /// # Errors
    ///
    /// - `TooLong` if the comment exceeds [`MAX_COMMENT_LENGTH`] characters
    pub fn new(
        submission_id: SubmissionId,
        outcome: ReviewOutcome,
        reviewer: UserId,
        comment: Option<String>,
    ) -> Result<Self, ValidationError> {
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        if let Some(text) = &comment {
            let len = text.chars().count();
            if len > MAX_COMMENT_LENGTH {
                return Err(ValidationError::too_long("comment", MAX_COMMENT_LENGTH, len));
            }
        }

        Ok(Self {
            id: DecisionId::new(),
            submission_id,
            outcome,
            reviewer,
            comment,
            decided_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn submission_id(&self) -> SubmissionId {
        self.submission_id
    }

    pub fn outcome(&self) -> ReviewOutcome {
        self.outcome
    }

    pub fn reviewer(&self) -> &UserId {
        &self.reviewer
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn decided_at(&self) -> &Timestamp {
        &self.decided_at
    }
}
