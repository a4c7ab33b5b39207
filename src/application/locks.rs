//! Per-submission write serialization.
//!
//! Every mutating workflow operation holds the submission's lock from
//! load to save, so decisions on one submission apply one at a time
//! while different submissions proceed in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::SubmissionId;

type LockMap = HashMap<SubmissionId, Arc<AsyncMutex<()>>>;

/// Keyed async mutex, one entry per submission.
///
/// Entries nobody holds or waits on are pruned on the next acquire.
#[derive(Debug, Default)]
pub struct SubmissionLocks {
    locks: Mutex<LockMap>,
}

impl SubmissionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> MutexGuard<'_, LockMap> {
        self.locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Waits for exclusive access to `id`. Released when the guard drops.
    pub async fn acquire(&self, id: SubmissionId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.map();
            map.retain(|key, lock| *key == id || Arc::strong_count(lock) > 1);
            map.entry(id).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of tracked submissions.
    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}
