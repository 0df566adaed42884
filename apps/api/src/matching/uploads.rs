use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::errors::AppError;

/// Creates the upload directory if it does not exist yet.
pub async fn ensure_upload_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload directory '{}'", dir.display()))
}

/// Final path component of a client-supplied filename, or `None` if there is none
/// (empty, `..`, or a bare directory).
pub fn sanitize_file_name(raw: &str) -> Option<&str> {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
}

/// Writes an uploaded resume to `dir/<file_name>`. Last write wins on name collisions.
pub async fn save_upload(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::Upload(format!("Failed to write '{}': {e}", path.display())))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("resume.pdf"), Some("resume.pdf"));
        assert_eq!(sanitize_file_name("../../etc/passwd"), Some("passwd"));
        assert_eq!(sanitize_file_name("/tmp/cv.pdf"), Some("cv.pdf"));
    }

    #[test]
    fn test_sanitize_rejects_nameless_paths() {
        assert_eq!(sanitize_file_name(""), None);
        assert_eq!(sanitize_file_name(".."), None);
        assert_eq!(sanitize_file_name("uploads/.."), None);
    }

    #[tokio::test]
    async fn test_save_upload_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        save_upload(dir.path(), "cv.pdf", b"first").await.unwrap();
        let path = save_upload(dir.path(), "cv.pdf", b"second").await.unwrap();

        assert_eq!(path, dir.path().join("cv.pdf"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_ensure_upload_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_upload_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        // idempotent
        ensure_upload_dir(&nested).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_upload_into_missing_dir_is_upload_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = save_upload(&missing, "cv.pdf", b"x").await.unwrap_err();
        assert!(matches!(err, AppError::Upload(_)));
    }
}
