use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest accepted photo upload (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

const STORAGE_PREFIX: &str = "properties";

/// Metadata of a photo the catalog editor wants to attach to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUpload {
    pub file_name: String,
    pub size_bytes: u64,
    #[serde(default)]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredMediaKey {
    pub storage_key: String,
    pub content_type: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("no file selected")]
    Empty,
    #[error("file '{file_name}' is too large ({size_bytes} bytes, max {max_bytes})")]
    TooLarge {
        file_name: String,
        size_bytes: u64,
        max_bytes: u64,
    },
    #[error("file '{file_name}' is not an image")]
    NotAnImage { file_name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaUploadPolicy {
    pub max_bytes: u64,
}

impl Default for MediaUploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl MediaUploadPolicy {
    /// Validate an upload and derive its unique storage key.
    pub fn prepare(
        &self,
        upload: &MediaUpload,
        now: DateTime<Utc>,
        suffix: &str,
    ) -> Result<StoredMediaKey, MediaError> {
        if upload.file_name.trim().is_empty() || upload.size_bytes == 0 {
            return Err(MediaError::Empty);
        }
        if upload.size_bytes > self.max_bytes {
            return Err(MediaError::TooLarge {
                file_name: upload.file_name.clone(),
                size_bytes: upload.size_bytes,
                max_bytes: self.max_bytes,
            });
        }

        let content_type = image_content_type(upload).ok_or_else(|| MediaError::NotAnImage {
            file_name: upload.file_name.clone(),
        })?;

        Ok(StoredMediaKey {
            storage_key: format!(
                "{STORAGE_PREFIX}/{}_{}_{}",
                now.timestamp_millis(),
                suffix,
                sanitize_file_name(&upload.file_name)
            ),
            content_type,
        })
    }
}

fn image_content_type(upload: &MediaUpload) -> Option<String> {
    let declared = upload
        .content_type
        .as_deref()
        .and_then(|raw| raw.parse::<mime::Mime>().ok());
    let resolved = declared.or_else(|| mime_guess::from_path(&upload.file_name).first())?;

    (resolved.type_() == mime::IMAGE).then(|| resolved.essence_str().to_string())
}

/// Replace every character outside `[A-Za-z0-9.-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Short random token that keeps same-named uploads apart.
pub fn upload_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string().chars().take(7).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn upload(file_name: &str, size_bytes: u64) -> MediaUpload {
        MediaUpload {
            file_name: file_name.to_string(),
            size_bytes,
            content_type: None,
        }
    }

    #[test]
    fn builds_sanitized_storage_key() {
        let stored = MediaUploadPolicy::default()
            .prepare(&upload("Fachada nova (1).jpg", 1024), now(), "abc1234")
            .expect("upload accepted");

        assert_eq!(
            stored.storage_key,
            "properties/1740830400000_abc1234_Fachada_nova__1_.jpg"
        );
        assert_eq!(stored.content_type, "image/jpeg");
    }

    #[test]
    fn rejects_uploads_over_five_megabytes() {
        let err = MediaUploadPolicy::default()
            .prepare(&upload("planta.png", MAX_UPLOAD_BYTES + 1), now(), "x")
            .expect_err("too large");

        assert!(matches!(err, MediaError::TooLarge { .. }));
    }

    #[test]
    fn rejects_non_image_content() {
        let policy = MediaUploadPolicy::default();

        let by_name = policy.prepare(&upload("contrato.pdf", 10), now(), "x");
        let declared = policy.prepare(
            &MediaUpload {
                content_type: Some("text/plain".to_string()),
                ..upload("foto.jpg", 10)
            },
            now(),
            "x",
        );

        assert!(matches!(by_name, Err(MediaError::NotAnImage { .. })));
        assert!(matches!(declared, Err(MediaError::NotAnImage { .. })));
    }

    #[test]
    fn empty_upload_is_rejected() {
        let err = MediaUploadPolicy::default()
            .prepare(&upload("foto.jpg", 0), now(), "x")
            .expect_err("empty");

        assert_eq!(err, MediaError::Empty);
    }

    #[test]
    fn suffix_has_seven_characters() {
        assert_eq!(upload_suffix().len(), 7);
    }
}
