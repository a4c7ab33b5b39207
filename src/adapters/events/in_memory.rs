//! Event bus that keeps every envelope in memory.
//!
//! Used by tests to assert on what the workflow emitted, and handy in
//! development when no log shipping is configured.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{DomainError, EventEnvelope, SubmissionId};
use crate::ports::EventPublisher;

#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: Mutex<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Vec<EventEnvelope>> {
        // Append-only, so a poisoned lock still holds a consistent log.
        self.published
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Everything published, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.log().clone()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.log()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Event types emitted for one submission, in publish order.
    pub fn history_of(&self, submission_id: SubmissionId) -> Vec<String> {
        let aggregate_id = submission_id.to_string();
        self.log()
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .map(|e| e.event_type.clone())
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.log().len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.log().iter().any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.log().push(event);
        Ok(())
    }
}
