//! Submission request parsing

use axum::extract::Multipart;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Fields extracted from a multipart submission
#[derive(Debug, Default)]
pub struct SubmissionUpload {
    pub stage_id: Option<Uuid>,
    pub content: Option<String>,
    pub file: Option<(String, Vec<u8>)>,
}

impl SubmissionUpload {
    /// Drain a multipart body into its known fields, ignoring the rest
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut upload = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("stage_id") => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?;
                    upload.stage_id = Some(Uuid::parse_str(text.trim()).map_err(|_| {
                        AppError::InvalidInput("Invalid stage_id".to_string())
                    })?);
                }
                Some("content") => {
                    upload.content = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| AppError::Upload(e.to_string()))?,
                    );
                }
                Some("file") => {
                    let filename = field.file_name().map(str::to_string).ok_or_else(|| {
                        AppError::Upload("File field has no filename".to_string())
                    })?;
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?;
                    upload.file = Some((filename, data.to_vec()));
                }
                _ => {}
            }
        }

        Ok(upload)
    }
}
