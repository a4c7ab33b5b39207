//! Maintainer roster backed by a fixed set of user ids.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::MaintainerRoster;

/// Roster built once from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticMaintainerRoster {
    maintainers: HashSet<UserId>,
}

impl StaticMaintainerRoster {
    pub fn new(maintainers: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            maintainers: maintainers.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.maintainers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maintainers.is_empty()
    }
}

#[async_trait]
impl MaintainerRoster for StaticMaintainerRoster {
    async fn is_maintainer(&self, user: &UserId) -> Result<bool, DomainError> {
        Ok(self.maintainers.contains(user))
    }
}
