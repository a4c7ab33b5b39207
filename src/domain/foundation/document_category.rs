//! DocumentCategory enum for the fixed set of prompt folders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, ErrorCode};

/// Folder a prompt document is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentCategory {
    /// Prompts for backend/service code.
    ServicePrompts,
    /// Prompts for user-interface code.
    UiPrompts,
}

impl DocumentCategory {
    /// All recognized categories.
    pub const ALL: [DocumentCategory; 2] =
        [DocumentCategory::ServicePrompts, DocumentCategory::UiPrompts];

    /// Folder name used in the repository layout.
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentCategory::ServicePrompts => "service-prompts",
            DocumentCategory::UiPrompts => "ui-prompts",
        }
    }

    /// Parses a category from its folder name.
    ///
    /// # Errors
    ///
    /// - `InvalidCategory` if the value is not a recognized folder
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == normalized)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidCategory,
                    format!(
                        "Unrecognized category '{}', expected one of: {}",
                        raw,
                        Self::ALL.map(|c| c.slug()).join(", ")
                    ),
                )
                .with_detail("category", raw)
            })
    }
}

impl FromStr for DocumentCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
