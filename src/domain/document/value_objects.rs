//! Value objects for contributed documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Maximum length of a repository-relative document path.
pub const MAX_PATH_LENGTH: usize = 255;

// ════════════════════════════════════════════════════════════════════════════════
// DocumentPath - Repository-relative location of a prompt file
// ════════════════════════════════════════════════════════════════════════════════

/// Repository-relative path of a document, always `/`-separated.
///
/// Structural checks only: naming conventions are enforced by the
/// validation gate so that a badly named file can still be opened as a
/// draft and then corrected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentPath(String);

impl DocumentPath {
    /// Parses and normalizes a path.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if blank
    /// - `InvalidFormat` if absolute, too long, or containing empty,
    ///   `.` or `..` components
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let normalized = raw.trim().replace('\\', "/");

        if normalized.is_empty() {
            return Err(ValidationError::empty_field("path"));
        }
        if normalized.len() > MAX_PATH_LENGTH {
            return Err(ValidationError::invalid_format(
                "path",
                format!("must be {} characters or less", MAX_PATH_LENGTH),
            ));
        }
        if normalized.starts_with('/') {
            return Err(ValidationError::invalid_format(
                "path",
                "must be relative to the repository root",
            ));
        }
        if normalized
            .split('/')
            .any(|part| part.is_empty() || part == "." || part == "..")
        {
            return Err(ValidationError::invalid_format(
                "path",
                "must not contain empty, '.' or '..' segments",
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the full path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the final path component.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Returns the directory directly containing the file, if any.
    pub fn parent_folder(&self) -> Option<&str> {
        let (dirs, _) = self.0.rsplit_once('/')?;
        Some(dirs.rsplit('/').next().unwrap_or(dirs))
    }
}

impl TryFrom<String> for DocumentPath {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentPath> for String {
    fn from(path: DocumentPath) -> Self {
        path.0
    }
}

impl FromStr for DocumentPath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// DocumentRevision - Counter of contributor edits
// ════════════════════════════════════════════════════════════════════════════════

/// Monotonically increasing count of contributor edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRevision(u32);

impl DocumentRevision {
    /// Creates the initial revision (1).
    pub fn initial() -> Self {
        Self(1)
    }

    /// Returns the next revision.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for DocumentRevision {
    fn default() -> Self {
        Self::initial()
    }
}
