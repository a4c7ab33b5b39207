//! EventPublisher port - where submission events go after a save.
//!
//! Publishing is fire-and-report: handlers log a failed publish and carry
//! on, so implementations should not retry internally for long.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;
}
