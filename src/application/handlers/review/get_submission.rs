//! GetSubmissionHandler - loads one submission.

use std::sync::Arc;

use super::load_submission;
use crate::domain::foundation::SubmissionId;
use crate::domain::review::{ReviewError, Submission};
use crate::ports::SubmissionRepository;

#[derive(Debug, Clone)]
pub struct GetSubmissionQuery {
    pub submission_id: SubmissionId,
}

pub struct GetSubmissionHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl GetSubmissionHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSubmissionQuery) -> Result<Submission, ReviewError> {
        load_submission(self.repository.as_ref(), query.submission_id).await
    }
}
