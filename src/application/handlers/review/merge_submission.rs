//! MergeSubmissionHandler - accepts an approved submission into the collection.

use std::sync::Arc;
use tracing::{info, warn};

use super::{load_submission, publish_event, require_maintainer};
use crate::application::SubmissionLocks;
use crate::domain::foundation::{CommandMetadata, EventId, SubmissionId};
use crate::domain::review::{ReviewError, Submission, SubmissionMerged};
use crate::ports::{EventPublisher, MaintainerRoster, SubmissionRepository};

#[derive(Debug, Clone)]
pub struct MergeSubmissionCommand {
    pub submission_id: SubmissionId,
}

#[derive(Debug, Clone)]
pub struct MergeSubmissionResult {
    pub submission: Submission,
    pub event: SubmissionMerged,
}

pub struct MergeSubmissionHandler {
    repository: Arc<dyn SubmissionRepository>,
    roster: Arc<dyn MaintainerRoster>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<SubmissionLocks>,
}

impl MergeSubmissionHandler {
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

    /// Approved -> Merged. Maintainers only.
    ///
    /// # Errors
    ///
    /// - `NotApprovedYet` with the current status from any other state
    pub async fn handle(
        &self,
        cmd: MergeSubmissionCommand,
        metadata: CommandMetadata,
    ) -> Result<MergeSubmissionResult, ReviewError> {
        require_maintainer(self.roster.as_ref(), &metadata).await?;

        let _guard = self.locks.acquire(cmd.submission_id).await;

        let mut submission = load_submission(self.repository.as_ref(), cmd.submission_id).await?;
        if let Err(err) = submission.merge() {
            warn!(
                submission_id = %submission.id(),
                trigger = "merge",
                status = %submission.status(),
                "merge refused"
            );
            return Err(err);
        }
        self.repository.update(&submission).await?;

        info!(
            submission_id = %submission.id(),
            trigger = "merge",
            path = %submission.document().path(),
            "submission merged"
        );

        let event = SubmissionMerged {
            event_id: EventId::new(),
            submission_id: submission.id(),
            path: submission.document().path().to_string(),
            category: submission.category(),
            merged_by: metadata.actor.clone(),
            merged_at: *submission.document().updated_at(),
        };
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(MergeSubmissionResult { submission, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review::test_support::{as_user, author, maintainer, Fixture};
    use crate::domain::foundation::ReviewStatus;
    use crate::domain::review::ReviewOutcome;

    fn handler(f: &Fixture) -> MergeSubmissionHandler {
        MergeSubmissionHandler::new(
            f.store.clone(),
            f.roster.clone(),
            f.bus.clone(),
            f.locks.clone(),
        )
    }

    #[tokio::test]
    async fn approved_submission_merges() {
        let f = Fixture::new();
        let sub = f.with_decision(ReviewOutcome::Approve).await;

        let result = handler(&f)
            .handle(
                MergeSubmissionCommand {
                    submission_id: sub.id(),
                },
                as_user(maintainer()),
            )
            .await
            .unwrap();

        assert_eq!(result.submission.status(), ReviewStatus::Merged);
        assert_eq!(result.submission.merged_at(), Some(&result.event.merged_at));
        assert!(f.bus.has_event("submission.merged.v1"));
    }

    #[tokio::test]
    async fn merge_in_review_is_not_approved_yet() {
        let f = Fixture::new();
        let sub = f.in_review().await;

        let err = handler(&f)
            .handle(
                MergeSubmissionCommand {
                    submission_id: sub.id(),
                },
                as_user(maintainer()),
            )
            .await
            .unwrap_err();

        assert_eq!(err, ReviewError::NotApprovedYet(ReviewStatus::InReview));
        let stored = f.store.find_by_id(&sub.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), ReviewStatus::InReview);
    }

    #[tokio::test]
    async fn contributors_cannot_merge() {
        let f = Fixture::new();
        let sub = f.with_decision(ReviewOutcome::Approve).await;

        let err = handler(&f)
            .handle(
                MergeSubmissionCommand {
                    submission_id: sub.id(),
                },
                as_user(author()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Forbidden(_)));
    }
}
