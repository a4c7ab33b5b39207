//! HTTP routes for submission endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    approve_submission, get_submission, list_submissions, merge_submission, open_submission,
    request_changes, resubmit_submission, revise_document, submit_submission,
    validate_submission, ReviewAppState,
};

/// Creates the submission router. Mount under `/api/submissions`.
pub fn review_routes(state: ReviewAppState) -> Router {
    Router::new()
        .route("/", post(open_submission).get(list_submissions))
        .route("/:id", get(get_submission))
        .route("/:id/validate", post(validate_submission))
        .route("/:id/submit", post(submit_submission))
        .route("/:id/resubmit", post(resubmit_submission))
        .route("/:id/document", patch(revise_document))
        .route("/:id/approve", post(approve_submission))
        .route("/:id/request-changes", post(request_changes))
        .route("/:id/merge", post(merge_submission))
        .with_state(state)
}
