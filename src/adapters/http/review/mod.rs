//! Submission review REST endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DecisionRequest, DecisionResponse, ErrorResponse, OpenSubmissionRequest,
    ReviseDocumentRequest, SubmissionListResponse, SubmissionResponse, ValidationResponse,
};
pub use handlers::ReviewAppState;
pub use routes::review_routes;
