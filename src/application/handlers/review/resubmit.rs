//! ResubmitHandler - sends a submission back into review after changes.

use std::sync::Arc;
use tracing::{info, warn};

use super::{load_submission, publish_event};
use crate::application::SubmissionLocks;
use crate::domain::foundation::{CommandMetadata, EventId, SubmissionId};
use crate::domain::review::{ReviewError, Submission, SubmissionResubmitted};
use crate::domain::validation::ValidationGate;
use crate::ports::{EventPublisher, SubmissionRepository};

#[derive(Debug, Clone)]
pub struct ResubmitCommand {
    pub submission_id: SubmissionId,
}

#[derive(Debug, Clone)]
pub struct ResubmitResult {
    pub submission: Submission,
    pub event: SubmissionResubmitted,
}

pub struct ResubmitHandler {
    repository: Arc<dyn SubmissionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    gate: Arc<ValidationGate>,
    locks: Arc<SubmissionLocks>,
}

impl ResubmitHandler {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        gate: Arc<ValidationGate>,
        locks: Arc<SubmissionLocks>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            gate,
            locks,
        }
    }

    /// Re-runs validation, then ChangesRequested -> InReview.
    pub async fn handle(
        &self,
        cmd: ResubmitCommand,
        metadata: CommandMetadata,
    ) -> Result<ResubmitResult, ReviewError> {
        let _guard = self.locks.acquire(cmd.submission_id).await;

        let mut submission = load_submission(self.repository.as_ref(), cmd.submission_id).await?;
        submission.authorize_author(&metadata.actor)?;

        let validation = self.gate.validate(submission.document());
        if !validation.passed() {
            warn!(
                submission_id = %submission.id(),
                violations = validation.violations().len(),
                "resubmission failed validation"
            );
            return Err(ReviewError::ValidationFailed(validation.into_violations()));
        }

        submission.resubmit()?;
        self.repository.update(&submission).await?;

        info!(
            submission_id = %submission.id(),
            trigger = "resubmit",
            status = %submission.status(),
            round = submission.decisions().len() + 1,
            "submission resubmitted"
        );

        let event = SubmissionResubmitted {
            event_id: EventId::new(),
            submission_id: submission.id(),
            resubmitted_by: metadata.actor.clone(),
            review_round: submission.decisions().len(),
            resubmitted_at: *submission.document().updated_at(),
        };
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(ResubmitResult { submission, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review::test_support::{as_user, author, Fixture};
    use crate::domain::foundation::ReviewStatus;
    use crate::domain::review::ReviewOutcome;

    fn handler(f: &Fixture) -> ResubmitHandler {
        ResubmitHandler::new(
            f.store.clone(),
            f.bus.clone(),
            f.gate.clone(),
            f.locks.clone(),
        )
    }

    #[tokio::test]
    async fn changes_requested_goes_back_to_review() {
        let f = Fixture::new();
        let sub = f.with_decision(ReviewOutcome::RequestChanges).await;

        let result = handler(&f)
            .handle(
                ResubmitCommand {
                    submission_id: sub.id(),
                },
                as_user(author()),
            )
            .await
            .unwrap();

        assert_eq!(result.submission.status(), ReviewStatus::InReview);
        assert_eq!(result.event.review_round, 1);
        assert!(f.bus.has_event("submission.resubmitted.v1"));
    }

    #[tokio::test]
    async fn resubmit_from_draft_is_invalid() {
        let f = Fixture::new();
        let sub = f.draft().await;

        let err = handler(&f)
            .handle(
                ResubmitCommand {
                    submission_id: sub.id(),
                },
                as_user(author()),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReviewError::InvalidTransition {
                from: ReviewStatus::Draft,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn resubmit_revalidates() {
        let f = Fixture::new();
        let mut sub = f.with_decision(ReviewOutcome::RequestChanges).await;
        // Author drops the evidence while addressing feedback.
        sub.revise(None).unwrap();
        f.store.update(&sub).await.unwrap();

        let err = handler(&f)
            .handle(
                ResubmitCommand {
                    submission_id: sub.id(),
                },
                as_user(author()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::ValidationFailed(_)));
        let stored = f.store.find_by_id(&sub.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), ReviewStatus::ChangesRequested);
    }
}
