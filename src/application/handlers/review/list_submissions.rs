//! ListSubmissionsHandler - submissions in one category folder.

use std::sync::Arc;

use crate::domain::foundation::DocumentCategory;
use crate::domain::review::{ReviewError, Submission};
use crate::ports::SubmissionRepository;

/// Raw category as supplied by the caller.
#[derive(Debug, Clone)]
pub struct ListSubmissionsQuery {
    pub category: String,
}

pub struct ListSubmissionsHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl ListSubmissionsHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListSubmissionsQuery) -> Result<Vec<Submission>, ReviewError> {
        let category = DocumentCategory::parse(&query.category)?;
        Ok(self.repository.list_by_category(category).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::review::test_support::Fixture;

    #[tokio::test]
    async fn lists_only_matching_category() {
        let f = Fixture::new();
        let sub = f.draft().await;
        let handler = ListSubmissionsHandler::new(f.store.clone());

        let service = handler
            .handle(ListSubmissionsQuery {
                category: "service-prompts".to_string(),
            })
            .await
            .unwrap();
        let ui = handler
            .handle(ListSubmissionsQuery {
                category: "ui-prompts".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(service.len(), 1);
        assert_eq!(service[0].id(), sub.id());
        assert!(ui.is_empty());
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let f = Fixture::new();

        let err = ListSubmissionsHandler::new(f.store.clone())
            .handle(ListSubmissionsQuery {
                category: "docs".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, ReviewError::InvalidCategory("docs".to_string()));
    }
}
