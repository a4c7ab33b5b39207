//! Review triggers and the transition table they drive.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ReviewError;
use crate::domain::foundation::ReviewStatus;

/// Action that moves a submission through review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewTrigger {
    Submit,
    RequestChanges,
    Approve,
    Resubmit,
    Merge,
}

impl ReviewTrigger {
    pub const ALL: [ReviewTrigger; 5] = [
        ReviewTrigger::Submit,
        ReviewTrigger::RequestChanges,
        ReviewTrigger::Approve,
        ReviewTrigger::Resubmit,
        ReviewTrigger::Merge,
    ];

    /// Transition table: the status this trigger leads to from `from`,
    /// or `None` if the trigger is not defined there.
    pub fn target(&self, from: ReviewStatus) -> Option<ReviewStatus> {
        use ReviewStatus::*;
        match (from, self) {
            (Draft, ReviewTrigger::Submit) => Some(InReview),
            (InReview, ReviewTrigger::RequestChanges) => Some(ChangesRequested),
            (InReview, ReviewTrigger::Approve) => Some(Approved),
            (ChangesRequested, ReviewTrigger::Resubmit) => Some(InReview),
            (Approved, ReviewTrigger::Merge) => Some(Merged),
            _ => None,
        }
    }

    /// Resolves the target status or the error for an illegal trigger.
    ///
    /// # Errors
    ///
    /// - `NotApprovedYet` for `Merge` outside `Approved`
    /// - `InvalidTransition` for every other undefined pair
    pub fn resolve(&self, from: ReviewStatus) -> Result<ReviewStatus, ReviewError> {
        match self.target(from) {
            Some(to) => Ok(to),
            None if *self == ReviewTrigger::Merge => Err(ReviewError::NotApprovedYet(from)),
            None => Err(ReviewError::InvalidTransition {
                from,
                trigger: *self,
            }),
        }
    }
}

impl fmt::Display for ReviewTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReviewTrigger::Submit => "submit",
            ReviewTrigger::RequestChanges => "request changes on",
            ReviewTrigger::Approve => "approve",
            ReviewTrigger::Resubmit => "resubmit",
            ReviewTrigger::Merge => "merge",
        };
        f.write_str(s)
    }
}
