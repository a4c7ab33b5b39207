//! ValidateSubmissionHandler - dry run of the validation gate.

use std::sync::Arc;

use super::load_submission;
use crate::domain::foundation::SubmissionId;
use crate::domain::review::ReviewError;
use crate::domain::validation::{ValidationGate, ValidationResult};
use crate::ports::SubmissionRepository;

#[derive(Debug, Clone)]
pub struct ValidateSubmissionQuery {
    pub submission_id: SubmissionId,
}

/// Reports what `submit` would say without changing anything.
pub struct ValidateSubmissionHandler {
    repository: Arc<dyn SubmissionRepository>,
    gate: Arc<ValidationGate>,
}

impl ValidateSubmissionHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>, gate: Arc<ValidationGate>) -> Self {
        Self { repository, gate }
    }

    pub async fn handle(&self, query: ValidateSubmissionQuery) -> Result<ValidationResult, ReviewError> {
        let submission = load_submission(self.repository.as_ref(), query.submission_id).await?;
        Ok(self.gate.validate(submission.document()))
    }
}
