//! Request and response bodies for the submission endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DocumentCategory, ErrorCode, ReviewStatus};
use crate::domain::review::{ReviewDecision, ReviewError, ReviewOutcome, Submission};
use crate::domain::validation::{ValidationResult, Violation};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/submissions
#[derive(Debug, Clone, Deserialize)]
pub struct OpenSubmissionRequest {
    pub path: String,
    pub category: String,
    #[serde(default)]
    pub evidence: Option<String>,
}

/// PATCH /api/submissions/:id/document
#[derive(Debug, Clone, Deserialize)]
pub struct ReviseDocumentRequest {
    #[serde(default)]
    pub evidence: Option<String>,
}

/// Body of approve and request-changes. The whole body is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecisionRequest {
    #[serde(default)]
    pub comment: Option<String>,
}

/// GET /api/submissions?category=
#[derive(Debug, Clone, Deserialize)]
pub struct ListSubmissionsParams {
    pub category: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub id: String,
    pub outcome: ReviewOutcome,
    pub reviewer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub decided_at: String,
}

impl From<&ReviewDecision> for DecisionResponse {
    fn from(decision: &ReviewDecision) -> Self {
        Self {
            id: decision.id().to_string(),
            outcome: decision.outcome(),
            reviewer: decision.reviewer().to_string(),
            comment: decision.comment().map(str::to_string),
            decided_at: decision.decided_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub path: String,
    pub category: DocumentCategory,
    pub status: ReviewStatus,
    pub author: String,
    pub evidence: Option<String>,
    pub revision: u32,
    pub version: u64,
    pub decisions: Vec<DecisionResponse>,
    pub created_at: String,
    pub updated_at: String,
    pub submitted_at: Option<String>,
    pub merged_at: Option<String>,
}

impl From<&Submission> for SubmissionResponse {
    fn from(submission: &Submission) -> Self {
        let document = submission.document();
        Self {
            id: submission.id().to_string(),
            path: document.path().to_string(),
            category: document.category(),
            status: submission.status(),
            author: document.author().to_string(),
            evidence: document.evidence().map(|p| p.to_string()),
            revision: document.revision().value(),
            version: submission.version(),
            decisions: submission.decisions().iter().map(Into::into).collect(),
            created_at: document.created_at().to_rfc3339(),
            updated_at: document.updated_at().to_rfc3339(),
            submitted_at: submission.submitted_at().map(|t| t.to_rfc3339()),
            merged_at: submission.merged_at().map(|t| t.to_rfc3339()),
        }
    }
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self::from(&submission)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionResponse>,
    pub total: usize,
}

impl From<Vec<Submission>> for SubmissionListResponse {
    fn from(submissions: Vec<Submission>) -> Self {
        let items: Vec<SubmissionResponse> = submissions.iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub submission_id: String,
    pub passed: bool,
    pub violations: Vec<Violation>,
}

impl ValidationResponse {
    pub fn new(submission_id: impl Into<String>, result: ValidationResult) -> Self {
        Self {
            submission_id: submission_id.into(),
            passed: result.passed(),
            violations: result.into_violations(),
        }
    }
}

/// Error body: `{ code, message, details? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// A request the handler could not parse: bad id, query string or body.
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidInput.to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&ReviewError> for ErrorResponse {
    fn from(error: &ReviewError) -> Self {
        let details = match error {
            ReviewError::ValidationFailed(violations) => {
                Some(serde_json::json!({ "violations": violations }))
            }
            ReviewError::InvalidTransition { from, trigger } => {
                Some(serde_json::json!({ "from": from, "trigger": trigger }))
            }
            ReviewError::NotApprovedYet(status) | ReviewError::DocumentLocked(status) => {
                Some(serde_json::json!({ "status": status }))
            }
            ReviewError::InvalidInput { field, .. } => Some(serde_json::json!({ "field": field })),
            ReviewError::InvalidCategory(value) => {
                Some(serde_json::json!({ "category": value }))
            }
            _ => None,
        };

        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{Document, DocumentPath};
    use crate::domain::foundation::UserId;
    use crate::domain::review::ReviewTrigger;

    #[test]
    fn open_request_evidence_is_optional() {
        let req: OpenSubmissionRequest = serde_json::from_str(
            r#"{"path":"ui-prompts/react_form_prompt.md","category":"ui-prompts"}"#,
        )
        .unwrap();
        assert!(req.evidence.is_none());
    }

    #[test]
    fn submission_response_uses_wire_names() {
        let doc = Document::new(
            DocumentPath::new("ui-prompts/react_form_prompt.md").unwrap(),
            "ui-prompts",
            UserId::new("contributor-1").unwrap(),
        )
        .unwrap();
        let response = SubmissionResponse::from(Submission::open(doc));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "draft");
        assert_eq!(json["category"], "ui-prompts");
        assert_eq!(json["version"], 1);
        assert!(json["submitted_at"].is_null());
    }

    #[test]
    fn transition_error_carries_details() {
        let error = ReviewError::InvalidTransition {
            from: ReviewStatus::Draft,
            trigger: ReviewTrigger::Approve,
        };
        let body = ErrorResponse::from(&error);

        assert_eq!(body.code, "INVALID_STATE_TRANSITION");
        let details = body.details.unwrap();
        assert_eq!(details["from"], "draft");
        assert_eq!(details["trigger"], "approve");
    }

    #[test]
    fn not_found_has_no_details() {
        let body = ErrorResponse::from(&ReviewError::NotFound(
            crate::domain::foundation::SubmissionId::new(),
        ));
        assert_eq!(body.code, "SUBMISSION_NOT_FOUND");
        assert!(body.details.is_none());
    }
}
