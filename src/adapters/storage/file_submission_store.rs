//! File-based Submission Store
//!
//! Stores each submission as `<submission_id>.yaml` under a data
//! directory. Writes go to a temporary file first and are renamed into
//! place, so a reader never sees a half-written submission.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use super::{check_version, duplicate, not_found};
use crate::domain::document::DocumentPath;
use crate::domain::foundation::{DocumentCategory, DomainError, ErrorCode, SubmissionId};
use crate::domain::review::Submission;
use crate::ports::SubmissionRepository;

const FILE_EXTENSION: &str = "yaml";

/// File-based storage for submissions
#[derive(Debug, Clone)]
pub struct FileSubmissionStore {
    base_path: PathBuf,
    /// Serializes writers so duplicate and version checks see a stable
    /// directory.
    write_lock: Arc<Mutex<()>>,
}

impl FileSubmissionStore {
    /// Create a new file store rooted at `base_path`.
    ///
    /// The directory is created lazily on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, id: &SubmissionId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, FILE_EXTENSION))
    }

    async fn ensure_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| io_error("create data directory", e))
    }

    async fn read_file(path: &Path) -> Result<Submission, DomainError> {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| io_error("read submission", e))?;
        serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Corrupt submission file {}: {}", path.display(), e),
            )
        })
    }

    async fn write_file(&self, submission: &Submission) -> Result<(), DomainError> {
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(submission).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to serialize submission: {}", e),
            )
        })?;

        let target = self.file_path(&submission.id());
        let tmp = target.with_extension(format!("{}.tmp", FILE_EXTENSION));
        fs::write(&tmp, yaml)
            .await
            .map_err(|e| io_error("write submission", e))?;
        fs::rename(&tmp, &target)
            .await
            .map_err(|e| io_error("move submission into place", e))
    }

    async fn load(&self, id: &SubmissionId) -> Result<Option<Submission>, DomainError> {
        let path = self.file_path(id);
        if !fs::try_exists(&path)
            .await
            .map_err(|e| io_error("stat submission", e))?
        {
            return Ok(None);
        }
        Self::read_file(&path).await.map(Some)
    }

    /// Reads every stored submission. A missing directory means none.
    async fn load_all(&self) -> Result<Vec<Submission>, DomainError> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("list submissions", e)),
        };

        let mut submissions = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error("list submissions", e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            submissions.push(Self::read_file(&path).await?);
        }
        Ok(submissions)
    }
}

fn io_error(action: &str, err: std::io::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {}: {}", action, err),
    )
}

#[async_trait]
impl SubmissionRepository for FileSubmissionStore {
    async fn save(&self, submission: &Submission) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let path = submission.document().path();
        if self.load(&submission.id()).await?.is_some()
            || self
                .load_all()
                .await?
                .iter()
                .any(|s| s.document().path() == path)
        {
            return Err(duplicate(path));
        }

        self.write_file(submission).await
    }

    async fn update(&self, submission: &Submission) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let stored = self
            .load(&submission.id())
            .await?
            .ok_or_else(|| not_found(&submission.id()))?;
        check_version(&stored, submission)?;

        self.write_file(submission).await
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<Submission>, DomainError> {
        self.load(id).await
    }

    async fn find_by_path(&self, path: &DocumentPath) -> Result<Option<Submission>, DomainError> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .find(|s| s.document().path() == path))
    }

    async fn list_by_category(
        &self,
        category: DocumentCategory,
    ) -> Result<Vec<Submission>, DomainError> {
        let mut found: Vec<Submission> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|s| s.category() == category)
            .collect();
        found.sort_by(|a, b| a.document().path().as_str().cmp(b.document().path().as_str()));
        Ok(found)
    }
}
