//! In-Memory Submission Store
//!
//! Keeps submissions in a map behind a tokio `RwLock`.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{check_version, duplicate, not_found};
use crate::domain::document::DocumentPath;
use crate::domain::foundation::{DocumentCategory, DomainError, SubmissionId};
use crate::domain::review::Submission;
use crate::ports::SubmissionRepository;

/// In-memory storage for submissions
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionStore {
    submissions: Arc<RwLock<HashMap<SubmissionId, Submission>>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.submissions.write().await.clear();
    }

    /// Number of stored submissions
    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.submissions.read().await.is_empty()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionStore {
    async fn save(&self, submission: &Submission) -> Result<(), DomainError> {
        let mut submissions = self.submissions.write().await;
        let path = submission.document().path();
        if submissions
            .values()
            .any(|s| s.id() == submission.id() || s.document().path() == path)
        {
            return Err(duplicate(path));
        }
        submissions.insert(submission.id(), submission.clone());
        Ok(())
    }

    async fn update(&self, submission: &Submission) -> Result<(), DomainError> {
        let mut submissions = self.submissions.write().await;
        let stored = submissions
            .get(&submission.id())
            .ok_or_else(|| not_found(&submission.id()))?;
        check_version(stored, submission)?;
        submissions.insert(submission.id(), submission.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<Submission>, DomainError> {
        Ok(self.submissions.read().await.get(id).cloned())
    }

    async fn find_by_path(&self, path: &DocumentPath) -> Result<Option<Submission>, DomainError> {
        Ok(self
            .submissions
            .read()
            .await
            .values()
            .find(|s| s.document().path() == path)
            .cloned())
    }

    async fn list_by_category(
        &self,
        category: DocumentCategory,
    ) -> Result<Vec<Submission>, DomainError> {
        let mut found: Vec<Submission> = self
            .submissions
            .read()
            .await
            .values()
            .filter(|s| s.category() == category)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.document().path().as_str().cmp(b.document().path().as_str()));
        Ok(found)
    }
}
