//! ReviseDocumentHandler - the author edits a draft or addresses feedback.

use std::sync::Arc;
use tracing::info;

use super::{load_submission, publish_event};
use crate::application::SubmissionLocks;
use crate::domain::document::DocumentPath;
use crate::domain::foundation::{CommandMetadata, EventId, SubmissionId};
use crate::domain::review::{DocumentRevised, ReviewError, Submission};
use crate::ports::{EventPublisher, SubmissionRepository};

/// Replaces the evidence reference. `None` clears it.
#[derive(Debug, Clone)]
pub struct ReviseDocumentCommand {
    pub submission_id: SubmissionId,
    pub evidence: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReviseDocumentResult {
    pub submission: Submission,
    pub event: DocumentRevised,
}

pub struct ReviseDocumentHandler {
    repository: Arc<dyn SubmissionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    locks: Arc<SubmissionLocks>,
}

impl ReviseDocumentHandler {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        locks: Arc<SubmissionLocks>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            locks,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReviseDocumentCommand,
        metadata: CommandMetadata,
    ) -> Result<ReviseDocumentResult, ReviewError> {
        let evidence = cmd.evidence.map(DocumentPath::new).transpose()?;

        let _guard = self.locks.acquire(cmd.submission_id).await;

        let mut submission = load_submission(self.repository.as_ref(), cmd.submission_id).await?;
        submission.authorize_author(&metadata.actor)?;

        let revision = submission.revise(evidence)?;
        self.repository.update(&submission).await?;

        info!(
            submission_id = %submission.id(),
            revision = revision.value(),
            "document revised"
        );

        let event = DocumentRevised {
            event_id: EventId::new(),
            submission_id: submission.id(),
            revision: revision.value(),
            evidence: submission.document().evidence().map(|p| p.to_string()),
            revised_at: *submission.document().updated_at(),
        };
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(ReviseDocumentResult { submission, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review::test_support::{
        as_user, author, maintainer, Fixture, EVIDENCE_PATH,
    };
    use crate::domain::foundation::ReviewStatus;

    fn handler(f: &Fixture) -> ReviseDocumentHandler {
        ReviseDocumentHandler::new(f.store.clone(), f.bus.clone(), f.locks.clone())
    }

    #[tokio::test]
    async fn author_adds_evidence_to_draft() {
        let f = Fixture::new();
        let sub = f.draft_without_evidence().await;

        let result = handler(&f)
            .handle(
                ReviseDocumentCommand {
                    submission_id: sub.id(),
                    evidence: Some(EVIDENCE_PATH.to_string()),
                },
                as_user(author()),
            )
            .await
            .unwrap();

        assert_eq!(result.event.revision, 2);
        assert_eq!(result.event.evidence.as_deref(), Some(EVIDENCE_PATH));
        assert!(f.bus.has_event("submission.revised.v1"));
    }

    #[tokio::test]
    async fn locked_while_in_review() {
        let f = Fixture::new();
        let sub = f.in_review().await;

        let err = handler(&f)
            .handle(
                ReviseDocumentCommand {
                    submission_id: sub.id(),
                    evidence: None,
                },
                as_user(author()),
            )
            .await
            .unwrap_err();

        assert_eq!(err, ReviewError::DocumentLocked(ReviewStatus::InReview));
    }

    #[tokio::test]
    async fn others_cannot_revise() {
        let f = Fixture::new();
        let sub = f.draft().await;

        let err = handler(&f)
            .handle(
                ReviseDocumentCommand {
                    submission_id: sub.id(),
                    evidence: None,
                },
                as_user(maintainer()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Forbidden(_)));
    }
}
