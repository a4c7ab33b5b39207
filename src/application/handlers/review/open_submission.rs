//! OpenSubmissionHandler - creates a draft document wrapped in a new submission.

use std::sync::Arc;
use tracing::info;

use super::publish_event;
use crate::domain::document::{Document, DocumentPath};
use crate::domain::foundation::{CommandMetadata, EventId};
use crate::domain::review::{ReviewError, Submission, SubmissionOpened};
use crate::ports::{EventPublisher, SubmissionRepository};

/// Command to open a submission. The actor becomes the author.
#[derive(Debug, Clone)]
pub struct OpenSubmissionCommand {
    pub path: String,
    pub category: String,
    pub evidence: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenSubmissionResult {
    pub submission: Submission,
    pub event: SubmissionOpened,
}

pub struct OpenSubmissionHandler {
    repository: Arc<dyn SubmissionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl OpenSubmissionHandler {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: OpenSubmissionCommand,
        metadata: CommandMetadata,
    ) -> Result<OpenSubmissionResult, ReviewError> {
        let path = DocumentPath::new(cmd.path)?;
        let mut document = Document::new(path, &cmd.category, metadata.actor.clone())?;
        if let Some(evidence) = cmd.evidence {
            document = document.with_evidence(DocumentPath::new(evidence)?);
        }

        if self.repository.find_by_path(document.path()).await?.is_some() {
            return Err(ReviewError::DuplicateDocument(document.path().to_string()));
        }

        let submission = Submission::open(document);
        self.repository.save(&submission).await?;

        info!(
            submission_id = %submission.id(),
            path = %submission.document().path(),
            category = %submission.category(),
            author = %submission.author(),
            "submission opened"
        );

        let event = SubmissionOpened {
            event_id: EventId::new(),
            submission_id: submission.id(),
            path: submission.document().path().to_string(),
            category: submission.category(),
            author: submission.author().clone(),
            has_evidence: submission.document().evidence().is_some(),
            opened_at: *submission.document().created_at(),
        };
        publish_event(self.event_publisher.as_ref(), &metadata, &event).await;

        Ok(OpenSubmissionResult { submission, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review::test_support::{
        as_user, author, Fixture, EVIDENCE_PATH, PROMPT_PATH,
    };
    use crate::domain::foundation::ReviewStatus;

    fn handler(f: &Fixture) -> OpenSubmissionHandler {
        OpenSubmissionHandler::new(f.store.clone(), f.bus.clone())
    }

    fn command(category: &str) -> OpenSubmissionCommand {
        OpenSubmissionCommand {
            path: PROMPT_PATH.to_string(),
            category: category.to_string(),
            evidence: Some(EVIDENCE_PATH.to_string()),
        }
    }

    #[tokio::test]
    async fn opens_draft_owned_by_actor() {
        let f = Fixture::new();

        let result = handler(&f)
            .handle(command("service-prompts"), as_user(author()))
            .await
            .unwrap();

        assert_eq!(result.submission.status(), ReviewStatus::Draft);
        assert_eq!(result.submission.author(), &author());
        assert!(result.event.has_evidence);
        assert_eq!(f.store.len().await, 1);
        assert!(f.bus.has_event("submission.opened.v1"));
    }

    #[tokio::test]
    async fn event_carries_actor_metadata() {
        let f = Fixture::new();
        handler(&f)
            .handle(command("service-prompts"), as_user(author()))
            .await
            .unwrap();

        let envelope = &f.bus.published_events()[0];
        assert_eq!(envelope.metadata.actor.as_deref(), Some("contributor-1"));
        assert_eq!(envelope.metadata.source.as_deref(), Some("test"));
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let f = Fixture::new();

        let err = handler(&f)
            .handle(command("backend-prompts"), as_user(author()))
            .await
            .unwrap_err();

        assert_eq!(err, ReviewError::InvalidCategory("backend-prompts".to_string()));
        assert!(f.store.is_empty().await);
        assert_eq!(f.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn bad_path_is_invalid_input() {
        let f = Fixture::new();
        let cmd = OpenSubmissionCommand {
            path: "../escape_prompt.md".to_string(),
            ..command("service-prompts")
        };

        let err = handler(&f).handle(cmd, as_user(author())).await.unwrap_err();

        assert!(matches!(err, ReviewError::InvalidInput { ref field, .. } if field == "path"));
    }

    #[tokio::test]
    async fn same_path_twice_is_duplicate() {
        let f = Fixture::new();
        let h = handler(&f);
        h.handle(command("service-prompts"), as_user(author()))
            .await
            .unwrap();

        let err = h
            .handle(command("service-prompts"), as_user(author()))
            .await
            .unwrap_err();

        assert_eq!(err, ReviewError::DuplicateDocument(PROMPT_PATH.to_string()));
        assert_eq!(f.bus.event_count(), 1);
    }
}
