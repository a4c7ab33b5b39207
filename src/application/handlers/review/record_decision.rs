//! RecordDecisionHandler - a maintainer approves or requests changes.

use std::sync::Arc;
use tracing::info;

use super::{load_submission, publish_event, require_maintainer};
use crate::application::SubmissionLocks;
use crate::domain::foundation::{CommandMetadata, EventId, SubmissionId};
use crate::domain::review::{
    ReviewDecision, ReviewDecisionRecorded, ReviewError, ReviewOutcome, Submission,
};
use crate::ports::{EventPublisher, MaintainerRoster, SubmissionRepository};

/// Command to record a decision. The actor is the reviewer.
#[derive(Debug, Clone)]
pub struct RecordDecisionCommand {
    pub submission_id: SubmissionId,
    pub outcome: ReviewOutcome,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordDecisionResult {
    pub submission: Submission,
    pub decision: ReviewDecision,
    pub event: ReviewDecisionRecorded,
}

pub struct RecordDecisionHandler {
    repository: Arc<dyn SubmissionRepository>,
    roster: Arc<dyn MaintainerRoster>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<SubmissionLocks>,
}

impl RecordDecisionHandler {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        roster: Arc<dyn MaintainerRoster>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<SubmissionLocks>,
    ) -> Self {
        Self {
            repository,
            roster,
            event_publisher,
            locks,
        }
    }

    /// # Errors
    ///
    /// - `Forbidden` if the reviewer is not a maintainer or is the author
    /// - `InvalidTransition` unless the submission is in review; the
    ///   decision is not recorded
    /// - `InvalidInput` if the comment is too long
    pub async fn handle(
        &self,
        cmd: RecordDecisionCommand,
        metadata: CommandMetadata,
    ) -> Result<RecordDecisionResult, ReviewError> {
        require_maintainer(self.roster.as_ref(), &metadata).await?;

        let _guard = self.locks.acquire(cmd.submission_id).await;

        let mut submission = load_submission(self.repository.as_ref(), cmd.submission_id).await?;
        if submission.document().is_author(&metadata.actor) {
            return Err(ReviewError::forbidden("authors cannot review their own submission"));
        }

        let decision = ReviewDecision::new(
            submission.id(),
            cmd.outcome,
            metadata.actor.clone(),
            cmd.comment,
        )?;
        submission.record_decision(decision.clone())?;
        self.repository.update(&submission).await?;

        info!(
            submission_id = %submission.id(),
            trigger = %cmd.outcome.trigger(),
            reviewer = %metadata.actor,
            status = %submission.status(),
            "review decision recorded"
        );

        let event = ReviewDecisionRecorded {
            event_id: EventId::new(),
            submission_id: submission.id(),
            decision_id: decision.id(),
            outcome: decision.outcome(),
            reviewer: decision.reviewer().clone(),
            new_status: submission.status(),
            decided_at: *decision.decided_at(),
        };
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(RecordDecisionResult {
            submission,
            decision,
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review::test_support::{as_user, author, maintainer, Fixture};
    use crate::domain::foundation::{ReviewStatus, UserId};
    use crate::domain::review::{ReviewTrigger, MAX_COMMENT_LENGTH};

    fn handler(f: &Fixture) -> RecordDecisionHandler {
        RecordDecisionHandler::new(
            f.store.clone(),
            f.roster.clone(),
            f.bus.clone(),
            f.locks.clone(),
        )
    }

    fn command(id: SubmissionId, outcome: ReviewOutcome) -> RecordDecisionCommand {
        RecordDecisionCommand {
            submission_id: id,
            outcome,
            comment: Some("checked against the results file".to_string()),
        }
    }

    #[tokio::test]
    async fn maintainer_approves() {
        let f = Fixture::new();
        let sub = f.in_review().await;

        let result = handler(&f)
            .handle(command(sub.id(), ReviewOutcome::Approve), as_user(maintainer()))
            .await
            .unwrap();

        assert_eq!(result.submission.status(), ReviewStatus::Approved);
        assert_eq!(result.submission.decisions().len(), 1);
        assert_eq!(result.event.new_status, ReviewStatus::Approved);
        assert_eq!(
            result.decision.comment(),
            Some("checked against the results file")
        );
        assert!(f.bus.has_event("submission.decision_recorded.v1"));
    }

    #[tokio::test]
    async fn maintainer_requests_changes() {
        let f = Fixture::new();
        let sub = f.in_review().await;

        let result = handler(&f)
            .handle(
                command(sub.id(), ReviewOutcome::RequestChanges),
                as_user(maintainer()),
            )
            .await
            .unwrap();

        assert_eq!(result.submission.status(), ReviewStatus::ChangesRequested);
    }

    #[tokio::test]
    async fn non_maintainer_is_forbidden() {
        let f = Fixture::new();
        let sub = f.in_review().await;
        let outsider = UserId::new("drive-by").unwrap();

        let err = handler(&f)
            .handle(command(sub.id(), ReviewOutcome::Approve), as_user(outsider))
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Forbidden(_)));
    }

    #[tokio::test]
    async fn maintainer_cannot_review_own_submission() {
        let f = Fixture {
            roster: std::sync::Arc::new(
                crate::adapters::roster::StaticMaintainerRoster::new(vec![author()]),
            ),
            ..Fixture::new()
        };
        let sub = f.in_review().await;

        let err = handler(&f)
            .handle(command(sub.id(), ReviewOutcome::Approve), as_user(author()))
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Forbidden(_)));
    }

    #[tokio::test]
    async fn decision_on_draft_is_not_recorded() {
        let f = Fixture::new();
        let sub = f.draft().await;

        let err = handler(&f)
            .handle(command(sub.id(), ReviewOutcome::Approve), as_user(maintainer()))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ReviewError::InvalidTransition {
                from: ReviewStatus::Draft,
                trigger: ReviewTrigger::Approve,
            }
        );
        let stored = f.store.find_by_id(&sub.id()).await.unwrap().unwrap();
        assert!(stored.decisions().is_empty());
        assert_eq!(f.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn overlong_comment_is_invalid_input() {
        let f = Fixture::new();
        let sub = f.in_review().await;
        let cmd = RecordDecisionCommand {
            comment: Some("x".repeat(MAX_COMMENT_LENGTH + 1)),
            ..command(sub.id(), ReviewOutcome::Approve)
        };

        let err = handler(&f).handle(cmd, as_user(maintainer())).await.unwrap_err();

        assert!(matches!(err, ReviewError::InvalidInput { ref field, .. } if field == "comment"));
    }
}
