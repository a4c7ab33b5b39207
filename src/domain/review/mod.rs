//! Review module - the submission aggregate and its state machine.
//!
//! - `Submission` wraps exactly one `Document` and its decision history
//! - `ReviewTrigger` is the transition table
//! - `ReviewDecision` records a maintainer evaluation
//! - `ReviewError` is what every workflow operation reports

mod decision;
mod errors;
mod events;
mod submission;
mod trigger;

pub use decision::{ReviewDecision, ReviewOutcome, MAX_COMMENT_LENGTH};
pub use errors::ReviewError;
pub use events::{
    DocumentRevised, ReviewDecisionRecorded, SubmissionMerged, SubmissionOpened,
    SubmissionResubmitted, SubmissionSubmitted,
};
pub use submission::Submission;
pub use trigger::ReviewTrigger;
