//! HTTP handlers for submission endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::adapters::http::middleware::Actor;
use crate::application::{OpenSubmissionCommand, WorkflowCoordinator};
use crate::domain::foundation::SubmissionId;
use crate::domain::review::{ReviewError, ReviewOutcome};

use super::dto::{
    DecisionRequest, ErrorResponse, ListSubmissionsParams, OpenSubmissionRequest,
    ReviseDocumentRequest, SubmissionListResponse, SubmissionResponse, ValidationResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ReviewAppState {
    coordinator: Arc<WorkflowCoordinator>,
}

impl ReviewAppState {
    pub fn new(coordinator: Arc<WorkflowCoordinator>) -> Self {
        Self { coordinator }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/submissions - Open a submission
pub async fn open_submission(
    State(state): State<ReviewAppState>,
    actor: Actor,
    body: Result<Json<OpenSubmissionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected("body", rejection.body_text()),
    };
    let cmd = OpenSubmissionCommand {
        path: req.path,
        category: req.category,
        evidence: req.evidence,
    };

    match state.coordinator.open(cmd, actor.metadata()).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(SubmissionResponse::from(&result.submission)),
        )
            .into_response(),
        Err(e) => handle_review_error(e),
    }
}

/// GET /api/submissions?category= - List submissions in a category
pub async fn list_submissions(
    State(state): State<ReviewAppState>,
    _actor: Actor,
    query: Result<Query<ListSubmissionsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => return rejected("query", rejection.body_text()),
    };
    match state.coordinator.list_by_category(&params.category).await {
        Ok(list) => (StatusCode::OK, Json(SubmissionListResponse::from(list))).into_response(),
        Err(e) => handle_review_error(e),
    }
}

/// GET /api/submissions/:id - Submission details with decision history
pub async fn get_submission(
    State(state): State<ReviewAppState>,
    _actor: Actor,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.coordinator.get(id).await {
        Ok(submission) => (StatusCode::OK, Json(SubmissionResponse::from(submission))).into_response(),
        Err(e) => handle_review_error(e),
    }
}

/// POST /api/submissions/:id/validate - Dry run of the validation gate
pub async fn validate_submission(
    State(state): State<ReviewAppState>,
    _actor: Actor,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.coordinator.validate(id).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ValidationResponse::new(id.to_string(), result)),
        )
            .into_response(),
        Err(e) => handle_review_error(e),
    }
}

/// POST /api/submissions/:id/submit - Draft into review
pub async fn submit_submission(
    State(state): State<ReviewAppState>,
    actor: Actor,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.coordinator.submit(id, actor.metadata()).await {
        Ok(result) => ok(&result.submission),
        Err(e) => handle_review_error(e),
    }
}

/// POST /api/submissions/:id/resubmit - Back into review after changes
pub async fn resubmit_submission(
    State(state): State<ReviewAppState>,
    actor: Actor,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.coordinator.resubmit(id, actor.metadata()).await {
        Ok(result) => ok(&result.submission),
        Err(e) => handle_review_error(e),
    }
}

/// PATCH /api/submissions/:id/document - Author edit
pub async fn revise_document(
    State(state): State<ReviewAppState>,
    actor: Actor,
    Path(id): Path<String>,
    body: Result<Json<ReviseDocumentRequest>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejected("body", rejection.body_text()),
    };

    match state.coordinator.revise(id, req.evidence, actor.metadata()).await {
        Ok(result) => ok(&result.submission),
        Err(e) => handle_review_error(e),
    }
}

/// POST /api/submissions/:id/approve
pub async fn approve_submission(
    State(state): State<ReviewAppState>,
    actor: Actor,
    Path(id): Path<String>,
    body: Option<Json<DecisionRequest>>,
) -> Response {
    record_decision(state, actor, id, ReviewOutcome::Approve, body).await
}

/// POST /api/submissions/:id/request-changes
pub async fn request_changes(
    State(state): State<ReviewAppState>,
    actor: Actor,
    Path(id): Path<String>,
    body: Option<Json<DecisionRequest>>,
) -> Response {
    record_decision(state, actor, id, ReviewOutcome::RequestChanges, body).await
}

/// POST /api/submissions/:id/merge
pub async fn merge_submission(
    State(state): State<ReviewAppState>,
    actor: Actor,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.coordinator.merge(id, actor.metadata()).await {
        Ok(result) => ok(&result.submission),
        Err(e) => handle_review_error(e),
    }
}

async fn record_decision(
    state: ReviewAppState,
    actor: Actor,
    id: String,
    outcome: ReviewOutcome,
    body: Option<Json<DecisionRequest>>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let comment = body.and_then(|Json(req)| req.comment);

    match state
        .coordinator
        .record_decision(id, outcome, comment, actor.metadata())
        .await
    {
        Ok(result) => ok(&result.submission),
        Err(e) => handle_review_error(e),
    }
}

fn ok(submission: &crate::domain::review::Submission) -> Response {
    (StatusCode::OK, Json(SubmissionResponse::from(submission))).into_response()
}

fn parse_id(raw: &str) -> Result<SubmissionId, Response> {
    raw.parse::<SubmissionId>()
        .map_err(|_| rejected("submission_id", "Invalid submission ID"))
}

/// Extractor failures answer with the same error body as domain errors.
fn rejected(field: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::invalid_input(field, message)),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn status_for(error: &ReviewError) -> StatusCode {
    match error {
        ReviewError::InvalidCategory(_) | ReviewError::InvalidInput { .. } => {
            StatusCode::BAD_REQUEST
        }
        ReviewError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ReviewError::InvalidTransition { .. }
        | ReviewError::NotApprovedYet(_)
        | ReviewError::DocumentLocked(_)
        | ReviewError::DuplicateDocument(_)
        | ReviewError::Conflict(_) => StatusCode::CONFLICT,
        ReviewError::NotFound(_) => StatusCode::NOT_FOUND,
        ReviewError::Forbidden(_) => StatusCode::FORBIDDEN,
        ReviewError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_review_error(error: ReviewError) -> Response {
    let status = status_for(&error);
    if let ReviewError::Infrastructure(msg) = &error {
        error!(error = %msg, "review request failed");
        return (status, Json(ErrorResponse::internal("Internal server error"))).into_response();
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ReviewStatus;
    use crate::domain::review::ReviewTrigger;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_review_error(ReviewError::NotFound(SubmissionId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_failed_maps_to_422() {
        let response = handle_review_error(ReviewError::ValidationFailed(vec![]));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn state_errors_map_to_409() {
        for error in [
            ReviewError::InvalidTransition {
                from: ReviewStatus::Draft,
                trigger: ReviewTrigger::Approve,
            },
            ReviewError::NotApprovedYet(ReviewStatus::InReview),
            ReviewError::DocumentLocked(ReviewStatus::Approved),
            ReviewError::DuplicateDocument("ui-prompts/a_b_prompt.md".to_string()),
            ReviewError::Conflict(SubmissionId::new()),
        ] {
            assert_eq!(status_for(&error), StatusCode::CONFLICT, "{:?}", error);
        }
    }

    #[test]
    fn input_errors_map_to_400() {
        assert_eq!(
            status_for(&ReviewError::InvalidCategory("docs".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ReviewError::invalid_input("path", "empty")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn forbidden_maps_to_403() {
        let response = handle_review_error(ReviewError::forbidden("not a maintainer"));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_review_error(ReviewError::infrastructure("disk full"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
