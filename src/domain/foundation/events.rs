//! Submission event plumbing.
//!
//! Every event in this crate is emitted by the Submission aggregate, so
//! the `domain_event!` macro fixes the aggregate to the event's
//! `submission_id` field and reads the schema version off the type name
//! (`submission.merged.v1` is version 1).

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{EventId, Timestamp};

/// Aggregate type recorded on every envelope.
pub const SUBMISSION_AGGREGATE: &str = "Submission";

/// Implemented by each submission event via `domain_event!`.
pub trait DomainEvent: Send + Sync {
    /// Dotted type name ending in `.v<N>`.
    fn event_type(&self) -> &'static str;

    fn aggregate_id(&self) -> String;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> EventId;

    /// Parsed from the `.v<N>` suffix of `event_type`; 1 when absent.
    fn schema_version(&self) -> u32 {
        schema_version_of(self.event_type())
    }
}

fn schema_version_of(event_type: &str) -> u32 {
    event_type
        .rsplit_once(".v")
        .and_then(|(_, version)| version.parse().ok())
        .unwrap_or(1)
}

/// Blanket `to_envelope()` for serializable events.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    fn to_envelope(&self) -> EventEnvelope {
        let payload = serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "serialization_error": e.to_string() })
        });

        EventEnvelope {
            event_id: self.event_id(),
            event_type: self.event_type().to_string(),
            schema_version: self.schema_version(),
            aggregate_id: self.aggregate_id(),
            aggregate_type: SUBMISSION_AGGREGATE.to_string(),
            occurred_at: self.occurred_at(),
            payload,
            metadata: EventMetadata::default(),
        }
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Implements `DomainEvent` for a struct with `event_id` and
/// `submission_id` fields.
///
/// ```ignore
/// domain_event!(SubmissionMerged, "submission.merged.v1", occurred_at = merged_at);
/// ```
#[macro_export]
macro_rules! domain_event {
    ($event:ident, $event_type:literal, occurred_at = $at:ident) => {
        impl $crate::domain::foundation::DomainEvent for $event {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> String {
                self.submission_id.to_string()
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$at
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.event_id
            }
        }
    };
}

pub use domain_event;

/// Request context copied from the command that caused the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    /// Contributor or maintainer who issued the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// Transport the command arrived through, e.g. "http".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// What publishers receive: identity fields plus the event as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    pub schema_version: u32,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    pub fn with_metadata(mut self, metadata: EventMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Decodes the payload back into a concrete event.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SubmissionId;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct LabelAdded {
        event_id: EventId,
        submission_id: SubmissionId,
        label: String,
        added_at: Timestamp,
    }

    domain_event!(LabelAdded, "submission.label_added.v3", occurred_at = added_at);

    fn sample() -> LabelAdded {
        LabelAdded {
            event_id: EventId::new(),
            submission_id: SubmissionId::new(),
            label: "needs-evidence".to_string(),
            added_at: Timestamp::now(),
        }
    }

    #[test]
    fn schema_version_comes_from_type_suffix() {
        assert_eq!(sample().schema_version(), 3);
        assert_eq!(schema_version_of("submission.merged.v12"), 12);
        assert_eq!(schema_version_of("submission.merged"), 1);
    }

    #[test]
    fn envelope_is_keyed_by_submission() {
        let event = sample();
        let envelope = event.to_envelope();

        assert_eq!(envelope.event_id, event.event_id);
        assert_eq!(envelope.aggregate_id, event.submission_id.to_string());
        assert_eq!(envelope.aggregate_type, SUBMISSION_AGGREGATE);
        assert_eq!(envelope.occurred_at, event.added_at);
        assert_eq!(envelope.payload["label"], "needs-evidence");
        assert_eq!(envelope.payload_as::<LabelAdded>().unwrap(), event);
    }

    #[test]
    fn empty_metadata_serializes_to_empty_object() {
        let json = serde_json::to_string(&EventMetadata::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
