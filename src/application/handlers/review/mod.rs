//! Review workflow handlers.
//!
//! One handler per command or query. Mutating handlers hold the
//! submission lock from load to save and publish their event after the
//! save succeeds.

mod get_submission;
mod list_submissions;
mod merge_submission;
mod open_submission;
mod record_decision;
mod resubmit;
mod revise_document;
mod submit_for_review;
mod validate_submission;

pub use get_submission::{GetSubmissionHandler, GetSubmissionQuery};
pub use list_submissions::{ListSubmissionsHandler, ListSubmissionsQuery};
pub use merge_submission::{MergeSubmissionCommand, MergeSubmissionHandler, MergeSubmissionResult};
pub use open_submission::{OpenSubmissionCommand, OpenSubmissionHandler, OpenSubmissionResult};
pub use record_decision::{RecordDecisionCommand, RecordDecisionHandler, RecordDecisionResult};
pub use resubmit::{ResubmitCommand, ResubmitHandler, ResubmitResult};
pub use revise_document::{ReviseDocumentCommand, ReviseDocumentHandler, ReviseDocumentResult};
pub use submit_for_review::{SubmitForReviewCommand, SubmitForReviewHandler, SubmitForReviewResult};
pub use validate_submission::{ValidateSubmissionHandler, ValidateSubmissionQuery};

use tracing::warn;

use crate::domain::foundation::{CommandMetadata, SerializableDomainEvent, SubmissionId};
use crate::domain::review::{ReviewError, Submission};
use crate::ports::{EventPublisher, MaintainerRoster, SubmissionRepository};

async fn load_submission(
    repository: &dyn SubmissionRepository,
    id: SubmissionId,
) -> Result<Submission, ReviewError> {
    repository
        .find_by_id(&id)
        .await?
        .ok_or(ReviewError::NotFound(id))
}

async fn require_maintainer(
    roster: &dyn MaintainerRoster,
    metadata: &CommandMetadata,
) -> Result<(), ReviewError> {
    if roster.is_maintainer(&metadata.actor).await? {
        Ok(())
    } else {
        Err(ReviewError::forbidden(format!(
            "{} is not a maintainer",
            metadata.actor
        )))
    }
}

/// Publishes after a committed save. A failed publish is logged, not
/// returned, because the state change already happened.
async fn publish_event<E: SerializableDomainEvent>(
    publisher: &dyn EventPublisher,
    metadata: &CommandMetadata,
    event: &E,
) {
    let envelope = metadata.stamp(event.to_envelope());
    let event_type = envelope.event_type.clone();
    if let Err(err) = publisher.publish(envelope).await {
        warn!(
            event_type = %event_type,
            aggregate_id = %event.aggregate_id(),
            error = %err,
            "failed to publish event"
        );
    }
}
