//! Review workflow error types.

use thiserror::Error;

use super::trigger::ReviewTrigger;
use crate::domain::foundation::{DomainError, ErrorCode, ReviewStatus, SubmissionId};
use crate::domain::validation::Violation;

/// Errors reported by the review workflow.
///
/// Every variant leaves the submission in its prior state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// Document classification is not a recognized folder.
    #[error("Unrecognized document category '{0}'")]
    InvalidCategory(String),

    /// Naming/evidence checks did not pass.
    #[error("Validation failed with {} violation(s)", .0.len())]
    ValidationFailed(Vec<Violation>),

    /// Trigger is not legal for the current state.
    #[error("Cannot {trigger} a submission that is {from}")]
    InvalidTransition {
        from: ReviewStatus,
        trigger: ReviewTrigger,
    },

    /// Merge attempted before approval.
    #[error("Submission must be approved before merging (currently {0})")]
    NotApprovedYet(ReviewStatus),

    /// Contributor edit attempted outside Draft/ChangesRequested.
    #[error("Document cannot be edited while {0}")]
    DocumentLocked(ReviewStatus),

    #[error("Submission not found: {0}")]
    NotFound(SubmissionId),

    #[error("A submission already exists for '{0}'")]
    DuplicateDocument(String),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Another writer updated the submission first.
    #[error("Submission {0} was modified concurrently, reload and retry")]
    Conflict(SubmissionId),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl ReviewError {
    pub fn forbidden(reason: impl Into<String>) -> Self {
        ReviewError::Forbidden(reason.into())
    }

    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReviewError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ReviewError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReviewError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            ReviewError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            ReviewError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            ReviewError::NotApprovedYet(_) => ErrorCode::NotApprovedYet,
            ReviewError::DocumentLocked(_) => ErrorCode::DocumentLocked,
            ReviewError::NotFound(_) => ErrorCode::SubmissionNotFound,
            ReviewError::DuplicateDocument(_) => ErrorCode::DuplicateDocument,
            ReviewError::Forbidden(_) => ErrorCode::Forbidden,
            ReviewError::InvalidInput { .. } => ErrorCode::InvalidInput,
            ReviewError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            ReviewError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for ReviewError {
    fn from(err: DomainError) -> Self {
        let submission_id = err
            .detail("submission_id")
            .and_then(|id| id.parse::<SubmissionId>().ok());

        match (err.code, submission_id) {
            (ErrorCode::InvalidCategory, _) => {
                ReviewError::InvalidCategory(err.detail("category").unwrap_or_default().to_string())
            }
            (ErrorCode::InvalidInput | ErrorCode::ValidationFailed, _) => ReviewError::InvalidInput {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            (ErrorCode::DuplicateDocument, _) => {
                ReviewError::DuplicateDocument(err.detail("path").unwrap_or_default().to_string())
            }
            (ErrorCode::SubmissionNotFound, Some(id)) => ReviewError::NotFound(id),
            (ErrorCode::ConcurrencyConflict, Some(id)) => ReviewError::Conflict(id),
            (ErrorCode::Forbidden, _) => ReviewError::Forbidden(err.message),
            _ => ReviewError::Infrastructure(err.to_string()),
        }
    }
}

impl From<crate::domain::foundation::ValidationError> for ReviewError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        ReviewError::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
