//! Upload storage
//!
//! Binary payloads land under one configured directory, named
//! `{kind}-{uuid}{ext}`. The path string is stored on the owning record;
//! there is no hashing or deduplication.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
};

/// Headroom over the upload ceiling for multipart boundaries, part headers
/// and the non-file fields that share the request body.
const MULTIPART_FRAMING_SLACK_BYTES: usize = 64 * 1024;

/// Request body limit that still lets a maximum-size upload through.
/// Axum caps bodies at 2 MB unless the router raises the limit, which would
/// reject large uploads before the per-file ceiling is ever consulted.
pub fn body_limit(config: &StorageConfig) -> usize {
    config.max_upload_bytes + MULTIPART_FRAMING_SLACK_BYTES
}

/// Extract the lowercase extension of an uploaded filename
pub fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Check an upload against an extension allowlist
pub fn check_extension(filename: &str, allowed: &[&str]) -> AppResult<String> {
    match file_extension(filename) {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(ext),
        _ => Err(AppError::Upload(format!(
            "File type not allowed (expected one of: {})",
            allowed.join(", ")
        ))),
    }
}

/// Build the on-disk path for a new upload of the given kind
pub fn stored_path(config: &StorageConfig, kind: &str, ext: &str) -> PathBuf {
    config
        .upload_path
        .join(format!("{}-{}.{}", kind, Uuid::new_v4(), ext))
}

/// Write uploaded bytes to disk, enforcing the configured size ceiling.
/// Returns the stored path as a string for persistence on the owning record.
pub async fn save_upload(
    config: &StorageConfig,
    kind: &str,
    filename: &str,
    allowed: &[&str],
    data: &[u8],
) -> AppResult<String> {
    if data.len() > config.max_upload_bytes {
        return Err(AppError::Upload(format!(
            "File exceeds maximum size of {} bytes",
            config.max_upload_bytes
        )));
    }

    let ext = check_extension(filename, allowed)?;

    tokio::fs::create_dir_all(&config.upload_path).await?;

    let path = stored_path(config, kind, &ext);
    tokio::fs::write(&path, data).await?;

    Ok(path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &Path) -> StorageConfig {
        StorageConfig {
            upload_path: dir.to_path_buf(),
            max_upload_bytes: 16,
        }
    }

    #[test]
    fn test_body_limit_clears_a_maximum_size_upload() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            upload_path: dir.path().to_path_buf(),
            max_upload_bytes: 64 * 1024 * 1024,
        };
        // A full-size file plus its multipart framing must fit in the body
        assert!(body_limit(&config) > config.max_upload_bytes);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("report.PDF"), Some("pdf".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(file_extension("noext"), None);
    }

    #[test]
    fn test_check_extension_allowlist() {
        assert!(check_extension("banner.png", &["png", "jpg"]).is_ok());
        assert!(check_extension("script.exe", &["png", "jpg"]).is_err());
        assert!(check_extension("noext", &["png"]).is_err());
    }

    #[tokio::test]
    async fn test_save_upload_writes_and_caps_size() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let path = save_upload(&config, "banner", "logo.png", &["png"], b"tiny")
            .await
            .unwrap();
        assert!(path.contains("banner-"));
        assert!(path.ends_with(".png"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"tiny");

        let too_big = vec![0u8; 17];
        let err = save_upload(&config, "banner", "logo.png", &["png"], &too_big)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upload(_)));
    }
}
