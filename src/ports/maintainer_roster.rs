//! MaintainerRoster port - who may record review decisions.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Port answering whether a user holds the maintainer role.
#[async_trait]
pub trait MaintainerRoster: Send + Sync {
    async fn is_maintainer(&self, user: &UserId) -> Result<bool, DomainError>;
}
