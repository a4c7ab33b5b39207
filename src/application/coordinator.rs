//! WorkflowCoordinator - the only component that drives submission state.
//!
//! Wires one handler per operation over shared ports, a shared
//! validation gate and one set of per-submission locks.

use std::sync::Arc;

use super::handlers::{
    GetSubmissionHandler, GetSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
    MergeSubmissionCommand, MergeSubmissionHandler, MergeSubmissionResult, OpenSubmissionCommand,
    OpenSubmissionHandler, OpenSubmissionResult, RecordDecisionCommand, RecordDecisionHandler,
    RecordDecisionResult, ResubmitCommand, ResubmitHandler, ResubmitResult,
    ReviseDocumentCommand, ReviseDocumentHandler, ReviseDocumentResult, SubmitForReviewCommand,
    SubmitForReviewHandler, SubmitForReviewResult, ValidateSubmissionHandler,
    ValidateSubmissionQuery,
};
use super::SubmissionLocks;
use crate::domain::foundation::{CommandMetadata, SubmissionId};
use crate::domain::review::{ReviewError, ReviewOutcome, Submission};
use crate::domain::validation::{ValidationGate, ValidationResult};
use crate::ports::{EventPublisher, MaintainerRoster, SubmissionRepository};

pub struct WorkflowCoordinator {
    open: OpenSubmissionHandler,
    submit: SubmitForReviewHandler,
    resubmit: ResubmitHandler,
    record_decision: RecordDecisionHandler,
    merge: MergeSubmissionHandler,
    revise: ReviseDocumentHandler,
    validate: ValidateSubmissionHandler,
    get: GetSubmissionHandler,
    list: ListSubmissionsHandler,
}

impl WorkflowCoordinator {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        roster: Arc<dyn MaintainerRoster>,
        event_publisher: Arc<dyn EventPublisher>,
        gate: ValidationGate,
    ) -> Self {
        let gate = Arc::new(gate);
        let locks = Arc::new(SubmissionLocks::new());

        Self {
            open: OpenSubmissionHandler::new(repository.clone(), event_publisher.clone()),
            submit: SubmitForReviewHandler::new(
                repository.clone(),
                event_publisher.clone(),
                gate.clone(),
                locks.clone(),
            ),
            resubmit: ResubmitHandler::new(
                repository.clone(),
                event_publisher.clone(),
                gate.clone(),
                locks.clone(),
            ),
            record_decision: RecordDecisionHandler::new(
                repository.clone(),
                roster.clone(),
                event_publisher.clone(),
                locks.clone(),
            ),
            merge: MergeSubmissionHandler::new(
                repository.clone(),
                roster,
                event_publisher.clone(),
                locks.clone(),
            ),
            revise: ReviseDocumentHandler::new(repository.clone(), event_publisher, locks),
            validate: ValidateSubmissionHandler::new(repository.clone(), gate),
            get: GetSubmissionHandler::new(repository.clone()),
            list: ListSubmissionsHandler::new(repository),
        }
    }

    /// Creates a Draft document wrapped in a new submission.
    pub async fn open(
        &self,
        cmd: OpenSubmissionCommand,
        metadata: CommandMetadata,
    ) -> Result<OpenSubmissionResult, ReviewError> {
        self.open.handle(cmd, metadata).await
    }

    /// Validates, then Draft -> InReview.
    pub async fn submit(
        &self,
        submission_id: SubmissionId,
        metadata: CommandMetadata,
    ) -> Result<SubmitForReviewResult, ReviewError> {
        self.submit
            .handle(SubmitForReviewCommand { submission_id }, metadata)
            .await
    }

    /// Validates, then ChangesRequested -> InReview.
    pub async fn resubmit(
        &self,
        submission_id: SubmissionId,
        metadata: CommandMetadata,
    ) -> Result<ResubmitResult, ReviewError> {
        self.resubmit
            .handle(ResubmitCommand { submission_id }, metadata)
            .await
    }

    /// Applies a maintainer decision and appends it to the history.
    pub async fn record_decision(
        &self,
        submission_id: SubmissionId,
        outcome: ReviewOutcome,
        comment: Option<String>,
        metadata: CommandMetadata,
    ) -> Result<RecordDecisionResult, ReviewError> {
        self.record_decision
            .handle(
                RecordDecisionCommand {
                    submission_id,
                    outcome,
                    comment,
                },
                metadata,
            )
            .await
    }

    /// Approved -> Merged.
    pub async fn merge(
        &self,
        submission_id: SubmissionId,
        metadata: CommandMetadata,
    ) -> Result<MergeSubmissionResult, ReviewError> {
        self.merge
            .handle(MergeSubmissionCommand { submission_id }, metadata)
            .await
    }

    /// Author edit while Draft or ChangesRequested.
    pub async fn revise(
        &self,
        submission_id: SubmissionId,
        evidence: Option<String>,
        metadata: CommandMetadata,
    ) -> Result<ReviseDocumentResult, ReviewError> {
        self.revise
            .handle(
                ReviseDocumentCommand {
                    submission_id,
                    evidence,
                },
                metadata,
            )
            .await
    }

    /// Dry run of the validation gate.
    pub async fn validate(&self, submission_id: SubmissionId) -> Result<ValidationResult, ReviewError> {
        self.validate
            .handle(ValidateSubmissionQuery { submission_id })
            .await
    }

    pub async fn get(&self, submission_id: SubmissionId) -> Result<Submission, ReviewError> {
        self.get.handle(GetSubmissionQuery { submission_id }).await
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Submission>, ReviewError> {
        self.list
            .handle(ListSubmissionsQuery {
                category: category.to_string(),
            })
            .await
    }
}
