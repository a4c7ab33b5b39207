//! ReviewStatus enum tracking a submission through review.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a contributed document under review.
///
/// ```text
/// Draft ──submit──▶ InReview ──approve──▶ Approved ──merge──▶ Merged
///                     │  ▲
///       requestChanges│  │resubmit
///                     ▼  │
///               ChangesRequested
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Draft,
    InReview,
    ChangesRequested,
    Approved,
    Merged,
}

impl ReviewStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [ReviewStatus; 5] = [
        ReviewStatus::Draft,
        ReviewStatus::InReview,
        ReviewStatus::ChangesRequested,
        ReviewStatus::Approved,
        ReviewStatus::Merged,
    ];

    /// Returns true if the contributor may still edit the document.
    pub fn is_editable(&self) -> bool {
        matches!(self, ReviewStatus::Draft | ReviewStatus::ChangesRequested)
    }

    /// Returns true while a maintainer decision is pending.
    pub fn awaits_review(&self) -> bool {
        matches!(self, ReviewStatus::InReview)
    }

    /// Position along the happy path, used to check that status only
    /// moves forward. `ChangesRequested` shares a rank with `InReview`
    /// so the review loop is not counted as a regression.
    pub fn progress_rank(&self) -> u8 {
        match self {
            ReviewStatus::Draft => 0,
            ReviewStatus::InReview | ReviewStatus::ChangesRequested => 1,
            ReviewStatus::Approved => 2,
            ReviewStatus::Merged => 3,
        }
    }
}

impl StateMachine for ReviewStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use ReviewStatus::*;
        match self {
            Draft => vec![InReview],
            InReview => vec![ChangesRequested, Approved],
            ChangesRequested => vec![InReview],
            Approved => vec![Merged],
            Merged => vec![],
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReviewStatus::Draft => "Draft",
            ReviewStatus::InReview => "InReview",
            ReviewStatus::ChangesRequested => "ChangesRequested",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Merged => "Merged",
        };
        write!(f, "{}", s)
    }
}
