//! Upload registry: validates, sanitizes, and persists user-submitted files.
//!
//! Stored names are composed as `YYYYMMDD_HHMMSS_<sanitized original>`.
//! Uniqueness relies on the second-resolution timestamp plus the original
//! name; two same-name uploads within the same second collide and the
//! second silently overwrites the first. That window is accepted behavior.
//! Renaming on collision would change observable download names.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Extensions accepted for upload, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] =
    &["pdf", "txt", "doc", "docx", "png", "jpg", "jpeg", "gif"];

/// Metadata for one successfully stored file, kept in session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Sanitized, timestamp-prefixed name the bytes live under.
    pub stored_filename: String,
    /// The client-supplied name, unsanitized, retained for display only.
    pub original_filename: String,
    /// `YYYY-MM-DD HH:MM:SS`.
    pub upload_time: String,
}

/// Upload failures, each carrying its user-facing notice text.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("file extension not allow-listed")]
    InvalidFileType,

    #[error("file not found in storage")]
    FileNotFound,

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Flash-notice text shown to the user when the operation is recovered
    /// at the handler boundary.
    pub fn notice(&self) -> String {
        match self {
            UploadError::NoFileSelected => "No file selected!".to_string(),
            UploadError::InvalidFileType => format!(
                "Invalid file type! Allowed types: {}",
                ALLOWED_EXTENSIONS.join(", ")
            ),
            UploadError::FileNotFound => "File not found!".to_string(),
            UploadError::Io(_) => {
                "Could not save the uploaded file. Please try again.".to_string()
            }
        }
    }
}

/// Returns true when the filename has an allow-listed extension.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Sanitizes a client-supplied filename into something safe to store under.
///
/// Path separators become underscores, whitespace runs collapse to a single
/// underscore, anything outside ASCII `[A-Za-z0-9_.-]` is dropped, and
/// leading/trailing `.`/`_` are trimmed. A degenerate name (e.g. entirely
/// non-ASCII) can sanitize to the empty string; the registry still stores
/// it under the bare timestamp prefix.
pub fn sanitize_filename(name: &str) -> String {
    let spaced = name.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Validates and persists uploads under a single storage directory.
#[derive(Debug, Clone)]
pub struct UploadRegistry {
    dir: PathBuf,
}

impl UploadRegistry {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        UploadRegistry { dir: dir.into() }
    }

    /// Creates the storage directory if absent. Called once at startup.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Validates `original_name`, writes `data` under the composed stored
    /// name, and returns the record to append to the session.
    pub async fn store(
        &self,
        original_name: &str,
        data: &[u8],
    ) -> Result<UploadRecord, UploadError> {
        self.store_at(original_name, data, Local::now()).await
    }

    async fn store_at(
        &self,
        original_name: &str,
        data: &[u8],
        now: DateTime<Local>,
    ) -> Result<UploadRecord, UploadError> {
        if original_name.is_empty() {
            return Err(UploadError::NoFileSelected);
        }
        if !allowed_file(original_name) {
            return Err(UploadError::InvalidFileType);
        }

        let stored_filename = format!(
            "{}_{}",
            now.format("%Y%m%d_%H%M%S"),
            sanitize_filename(original_name)
        );
        tokio::fs::write(self.dir.join(&stored_filename), data).await?;
        info!(
            "Stored upload {} ({} bytes) as {}",
            original_name,
            data.len(),
            stored_filename
        );

        Ok(UploadRecord {
            stored_filename,
            original_filename: original_name.to_string(),
            upload_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }

    /// Looks up a stored file and returns its bytes.
    ///
    /// Names containing path components are treated as not found, never
    /// resolved outside the storage directory.
    pub async fn open(&self, stored_name: &str) -> Result<Vec<u8>, UploadError> {
        if stored_name.is_empty()
            || stored_name.contains('/')
            || stored_name.contains('\\')
            || stored_name.contains("..")
        {
            return Err(UploadError::FileNotFound);
        }
        let path = self.dir.join(stored_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(UploadError::FileNotFound),
            Err(e) => Err(UploadError::Io(e)),
        }
    }

    #[cfg(test)]
    fn path_of(&self, stored_name: &str) -> PathBuf {
        self.dir.join(stored_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn registry() -> (tempfile::TempDir, UploadRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let registry = UploadRegistry::new(dir.path());
        (dir, registry)
    }

    #[test]
    fn test_allowed_extensions_pass() {
        for ext in ALLOWED_EXTENSIONS {
            assert!(allowed_file(&format!("report.{ext}")), "{ext}");
            assert!(
                allowed_file(&format!("report.{}", ext.to_ascii_uppercase())),
                "uppercase {ext}"
            );
        }
    }

    #[test]
    fn test_disallowed_extensions_fail() {
        for name in ["payload.exe", "run.sh", "noext", "dotless.", "archive.tar.gz"] {
            assert!(!allowed_file(name), "{name}");
        }
    }

    #[test]
    fn test_hidden_file_with_allowed_extension_passes() {
        assert!(allowed_file(".txt"));
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename(r"C:\temp\notes.txt"), "C_temp_notes.txt");
    }

    #[test]
    fn test_sanitize_collapses_whitespace_and_drops_unsafe_chars() {
        assert_eq!(sanitize_filename("my  resume (final).pdf"), "my_resume_final.pdf");
        assert_eq!(sanitize_filename("naïve café.txt"), "nave_caf.txt");
    }

    #[test]
    fn test_sanitize_trims_leading_dots_and_underscores() {
        assert_eq!(sanitize_filename("__init__.py"), "init__.py");
        assert_eq!(sanitize_filename("..hidden.txt"), "hidden.txt");
    }

    #[test]
    fn test_sanitize_degenerate_name_is_empty() {
        assert_eq!(sanitize_filename("日本語"), "");
    }

    #[tokio::test]
    async fn test_store_rejects_empty_filename() {
        let (_dir, registry) = registry();
        let err = registry.store("", b"data").await.unwrap_err();
        assert!(matches!(err, UploadError::NoFileSelected));
    }

    #[tokio::test]
    async fn test_store_rejects_disallowed_extension() {
        let (_dir, registry) = registry();
        let err = registry.store("malware.exe", b"data").await.unwrap_err();
        assert!(matches!(err, UploadError::InvalidFileType));
        assert!(err.notice().contains("pdf, txt, doc, docx"));
    }

    #[tokio::test]
    async fn test_store_composes_timestamped_name() {
        let (_dir, registry) = registry();
        let now = Local.with_ymd_and_hms(2026, 8, 6, 9, 30, 15).unwrap();
        let record = registry.store_at("a.txt", b"hello", now).await.unwrap();
        assert_eq!(record.stored_filename, "20260806_093015_a.txt");
        assert_eq!(record.original_filename, "a.txt");
        assert_eq!(record.upload_time, "2026-08-06 09:30:15");
        assert_eq!(
            std::fs::read(registry.path_of(&record.stored_filename)).unwrap(),
            b"hello"
        );
    }

    #[tokio::test]
    async fn test_same_name_different_timestamps_stay_distinct() {
        let (_dir, registry) = registry();
        let first = Local.with_ymd_and_hms(2026, 8, 6, 9, 30, 15).unwrap();
        let second = Local.with_ymd_and_hms(2026, 8, 6, 9, 30, 16).unwrap();
        let a = registry.store_at("a.txt", b"one", first).await.unwrap();
        let b = registry.store_at("a.txt", b"two", second).await.unwrap();
        assert_ne!(a.stored_filename, b.stored_filename);
        assert_eq!(registry.open(&a.stored_filename).await.unwrap(), b"one");
        assert_eq!(registry.open(&b.stored_filename).await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_same_second_upload_overwrites() {
        // Accepted collision window: second write wins under the same name.
        let (_dir, registry) = registry();
        let now = Local.with_ymd_and_hms(2026, 8, 6, 9, 30, 15).unwrap();
        let a = registry.store_at("a.txt", b"one", now).await.unwrap();
        let b = registry.store_at("a.txt", b"two", now).await.unwrap();
        assert_eq!(a.stored_filename, b.stored_filename);
        assert_eq!(registry.open(&a.stored_filename).await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let (_dir, registry) = registry();
        let err = registry.open("never_written.txt").await.unwrap_err();
        assert!(matches!(err, UploadError::FileNotFound));
    }

    #[tokio::test]
    async fn test_open_rejects_path_traversal() {
        let (_dir, registry) = registry();
        for name in ["../secret", "a/../b.txt", "nested/name.txt", r"win\name.txt", ""] {
            let err = registry.open(name).await.unwrap_err();
            assert!(matches!(err, UploadError::FileNotFound), "{name}");
        }
    }
}
