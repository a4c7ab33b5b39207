//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod review;

pub use review::{
    GetSubmissionHandler, GetSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
    MergeSubmissionCommand, MergeSubmissionHandler, MergeSubmissionResult, OpenSubmissionCommand,
    OpenSubmissionHandler, OpenSubmissionResult, RecordDecisionCommand, RecordDecisionHandler,
    RecordDecisionResult, ResubmitCommand, ResubmitHandler, ResubmitResult,
    ReviseDocumentCommand, ReviseDocumentHandler, ReviseDocumentResult, SubmitForReviewCommand,
    SubmitForReviewHandler, SubmitForReviewResult, ValidateSubmissionHandler,
    ValidateSubmissionQuery,
};
