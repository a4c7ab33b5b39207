//! Who issued a command and which request it belongs to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EventEnvelope, EventMetadata, UserId};

/// Passed to every handler alongside the command itself, and copied onto
/// the events the handler publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Checked against the author and the maintainer roster.
    pub actor: UserId,

    /// Fixed at construction so every event from one command shares it.
    correlation_id: String,

    /// e.g. "http"
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new(actor: UserId) -> Self {
        Self {
            actor,
            correlation_id: Uuid::new_v4().to_string(),
            source: None,
        }
    }

    /// Reuses an upstream id such as `x-request-id`.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn stamp(&self, envelope: EventEnvelope) -> EventEnvelope {
        envelope.with_metadata(EventMetadata {
            correlation_id: Some(self.correlation_id.clone()),
            actor: Some(self.actor.to_string()),
            source: self.source.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, SubmissionId, Timestamp, SUBMISSION_AGGREGATE};

    fn actor() -> UserId {
        UserId::new("maintainer-1").unwrap()
    }

    fn bare_envelope() -> EventEnvelope {
        EventEnvelope {
            event_id: EventId::new(),
            event_type: "submission.merged.v1".to_string(),
            schema_version: 1,
            aggregate_id: SubmissionId::new().to_string(),
            aggregate_type: SUBMISSION_AGGREGATE.to_string(),
            occurred_at: Timestamp::now(),
            payload: serde_json::json!({}),
            metadata: EventMetadata::default(),
        }
    }

    #[test]
    fn correlation_id_is_stable_across_reads() {
        let metadata = CommandMetadata::new(actor());
        assert!(!metadata.correlation_id().is_empty());
        assert_eq!(metadata.correlation_id(), metadata.correlation_id());
    }

    #[test]
    fn upstream_request_id_replaces_generated_one() {
        let metadata = CommandMetadata::new(actor()).with_correlation_id("req-42");
        assert_eq!(metadata.correlation_id(), "req-42");
    }

    #[test]
    fn stamp_copies_request_context() {
        let metadata = CommandMetadata::new(actor())
            .with_correlation_id("req-7")
            .with_source("http");

        let stamped = metadata.stamp(bare_envelope());

        assert_eq!(
            stamped.metadata,
            EventMetadata {
                correlation_id: Some("req-7".to_string()),
                actor: Some("maintainer-1".to_string()),
                source: Some("http".to_string()),
            }
        );
    }

    #[test]
    fn events_from_one_command_share_a_correlation_id() {
        let metadata = CommandMetadata::new(actor());
        let a = metadata.stamp(bare_envelope());
        let b = metadata.stamp(bare_envelope());
        assert_eq!(a.metadata.correlation_id, b.metadata.correlation_id);
    }
}
