//! Local filesystem storage implementation.
//!
//! ## Storage Layout
//!
//! ```text
//! {root}/
//! └── YYYY/
//!     └── MM/
//!         ├── {decision_no}_{title}.md
//!         └── INDEX_YYYY_MM.md
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::Period;
use crate::storage::DocumentStorage;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Get the full path of a document.
    fn path(&self, period: Period, filename: &str) -> PathBuf {
        self.root_dir.join(period.dir_key()).join(filename)
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.ensure_dir(path).await?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStorage for LocalStorage {
    async fn write_document(
        &self,
        period: Period,
        filename: &str,
        content: &str,
    ) -> Result<String> {
        let path = self.path(period, filename);
        self.write_bytes(&path, content.as_bytes()).await?;
        Ok(path.display().to_string())
    }

    async fn read_document(&self, period: Period, filename: &str) -> Result<Option<String>> {
        let path = self.path(period, filename);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let period = Period::new(2019, 3);

        let location = storage
            .write_document(period, "2019-0001_제목.md", "# 제목")
            .await
            .unwrap();
        assert!(location.ends_with("2019-0001_제목.md"));
        assert!(tmp.path().join("2019/03/2019-0001_제목.md").exists());

        let content = storage.read_document(period, "2019-0001_제목.md").await.unwrap();
        assert_eq!(content.as_deref(), Some("# 제목"));
    }

    #[tokio::test]
    async fn test_read_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let data = storage.read_document(Period::new(2020, 1), "nope.md").await.unwrap();
        assert!(data.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let period = Period::new(2021, 12);

        storage.write_document(period, "a.md", "one").await.unwrap();
        storage.write_document(period, "a.md", "two").await.unwrap();

        let dir = tmp.path().join("2021/12");
        let names: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["a.md"]);
        assert_eq!(
            storage.read_document(period, "a.md").await.unwrap().as_deref(),
            Some("two")
        );
    }
}
