//! Error vocabulary shared by value objects, ports and adapters.
//!
//! `ValidationError` comes out of value-object constructors.
//! `DomainError` is what ports return: a stable `ErrorCode` plus a
//! message and string details that callers map into richer errors.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// A rejected input value, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: String },

    #[error("{field} is {actual} characters, at most {max} allowed")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("{field} is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField { field: field.into() }
    }

    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}

/// Stable, machine-readable error codes. Serialized as SCREAMING_SNAKE_CASE
/// in API error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input
    InvalidInput,
    InvalidCategory,
    ValidationFailed,

    // Workflow state
    SubmissionNotFound,
    InvalidStateTransition,
    NotApprovedYet,
    DocumentLocked,
    DuplicateDocument,
    ConcurrencyConflict,

    Forbidden,

    // Infrastructure
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidCategory => "INVALID_CATEGORY",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::SubmissionNotFound => "SUBMISSION_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::NotApprovedYet => "NOT_APPROVED_YET",
            ErrorCode::DocumentLocked => "DOCUMENT_LOCKED",
            ErrorCode::DuplicateDocument => "DUPLICATE_DOCUMENT",
            ErrorCode::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Storage or runtime failure rather than a problem with the request.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, ErrorCode::DatabaseError | ErrorCode::InternalError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned across port boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    /// Context such as `submission_id`, `path`, `category` or `field`.
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::new(ErrorCode::InvalidInput, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(ValidationError::empty_field("path").to_string(), "path is required");
        assert_eq!(
            ValidationError::too_long("comment", 10_000, 10_001).to_string(),
            "comment is 10001 characters, at most 10000 allowed"
        );
        assert_eq!(
            ValidationError::invalid_format("path", "must be relative").to_string(),
            "path is malformed: must be relative"
        );
    }

    #[test]
    fn domain_error_display_leads_with_code() {
        let err = DomainError::new(ErrorCode::SubmissionNotFound, "Submission not found");
        assert_eq!(err.to_string(), "[SUBMISSION_NOT_FOUND] Submission not found");
    }

    #[test]
    fn details_are_looked_up_by_key() {
        let err = DomainError::new(ErrorCode::DuplicateDocument, "already open")
            .with_detail("path", "ui-prompts/vue_component_prompt.md");

        assert_eq!(err.detail("path"), Some("ui-prompts/vue_component_prompt.md"));
        assert_eq!(err.detail("category"), None);
    }

    #[test]
    fn validation_error_becomes_invalid_input() {
        let err: DomainError = ValidationError::empty_field("user_id").into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.detail("field"), Some("user_id"));
    }

    #[test]
    fn serialized_code_matches_display() {
        for code in [ErrorCode::NotApprovedYet, ErrorCode::InvalidInput, ErrorCode::DatabaseError] {
            assert_eq!(serde_json::to_value(code).unwrap(), code.as_str());
        }
        assert!(ErrorCode::DatabaseError.is_infrastructure());
        assert!(!ErrorCode::Forbidden.is_infrastructure());
    }
}
