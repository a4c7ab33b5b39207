//! SubmitForReviewHandler - validates a draft and moves it into review.

use std::sync::Arc;
use tracing::{info, warn};

use super::{load_submission, publish_event};
use crate::application::SubmissionLocks;
use crate::domain::foundation::{CommandMetadata, EventId, SubmissionId};
use crate::domain::review::{ReviewError, Submission, SubmissionSubmitted};
use crate::domain::validation::ValidationGate;
use crate::ports::{EventPublisher, SubmissionRepository};

#[derive(Debug, Clone)]
pub struct SubmitForReviewCommand {
    pub submission_id: SubmissionId,
}

#[derive(Debug, Clone)]
pub struct SubmitForReviewResult {
    pub submission: Submission,
    pub event: SubmissionSubmitted,
}

pub struct SubmitForReviewHandler {
    repository: Arc<dyn SubmissionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    gate: Arc<ValidationGate>,
    locks: Arc<SubmissionLocks>,
}

impl SubmitForReviewHandler {
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

    /// Runs the validation gate, then Draft -> InReview.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the submission doesn't exist
    /// - `Forbidden` unless the actor is the author
    /// - `ValidationFailed` with every violation; nothing is saved
    /// - `InvalidTransition` unless the submission is a draft
    pub async fn handle(
        &self,
        cmd: SubmitForReviewCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitForReviewResult, ReviewError> {
        let _guard = self.locks.acquire(cmd.submission_id).await;

        let mut submission = load_submission(self.repository.as_ref(), cmd.submission_id).await?;
        submission.authorize_author(&metadata.actor)?;

        let validation = self.gate.validate(submission.document());
        if !validation.passed() {
            warn!(
                submission_id = %submission.id(),
                violations = validation.violations().len(),
                "submission failed validation"
            );
            return Err(ReviewError::ValidationFailed(validation.into_violations()));
        }

        submission.submit()?;
        self.repository.update(&submission).await?;

        info!(
            submission_id = %submission.id(),
            trigger = "submit",
            status = %submission.status(),
            "submission entered review"
        );

        let event = SubmissionSubmitted {
            event_id: EventId::new(),
            submission_id: submission.id(),
            path: submission.document().path().to_string(),
            submitted_by: metadata.actor.clone(),
            submitted_at: *submission.document().updated_at(),
        };
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(SubmitForReviewResult { submission, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review::test_support::{as_user, author, maintainer, Fixture};
    use crate::domain::foundation::ReviewStatus;
    use crate::domain::validation::ViolationRule;

    fn handler(f: &Fixture) -> SubmitForReviewHandler {
        SubmitForReviewHandler::new(
            f.store.clone(),
            f.bus.clone(),
            f.gate.clone(),
            f.locks.clone(),
        )
    }

    #[tokio::test]
    async fn valid_draft_enters_review() {
        let f = Fixture::new();
        let draft = f.draft().await;

        let result = handler(&f)
            .handle(
                SubmitForReviewCommand {
                    submission_id: draft.id(),
                },
                as_user(author()),
            )
            .await
            .unwrap();

        assert_eq!(result.submission.status(), ReviewStatus::InReview);
        let stored = f.store.find_by_id(&draft.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), ReviewStatus::InReview);
        assert_eq!(stored.submitted_at(), Some(&result.event.submitted_at));
        assert!(f.bus.has_event("submission.submitted.v1"));
    }

    #[tokio::test]
    async fn missing_evidence_blocks_submission() {
        let f = Fixture::new();
        let draft = f.draft_without_evidence().await;

        let err = handler(&f)
            .handle(
                SubmitForReviewCommand {
                    submission_id: draft.id(),
                },
                as_user(author()),
            )
            .await
            .unwrap_err();

        match err {
            ReviewError::ValidationFailed(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].rule, ViolationRule::MissingEvidence);
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
        let stored = f.store.find_by_id(&draft.id()).await.unwrap().unwrap();
        assert_eq!(stored, draft);
        assert_eq!(f.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn only_author_can_submit() {
        let f = Fixture::new();
        let draft = f.draft().await;

        let err = handler(&f)
            .handle(
                SubmitForReviewCommand {
                    submission_id: draft.id(),
                },
                as_user(maintainer()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Forbidden(_)));
    }

    #[tokio::test]
    async fn submitting_twice_is_invalid_transition() {
        let f = Fixture::new();
        let sub = f.in_review().await;

        let err = handler(&f)
            .handle(
                SubmitForReviewCommand {
                    submission_id: sub.id(),
                },
                as_user(author()),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReviewError::InvalidTransition {
                from: ReviewStatus::InReview,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unknown_submission_is_not_found() {
        let f = Fixture::new();
        let id = SubmissionId::new();

        let err = handler(&f)
            .handle(SubmitForReviewCommand { submission_id: id }, as_user(author()))
            .await
            .unwrap_err();

        assert_eq!(err, ReviewError::NotFound(id));
    }
}
