//! Multipart upload intake and validation for resume files.

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";
const MIB: usize = 1024 * 1024;

#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub content: Bytes,
}

#[derive(Debug)]
pub struct UploadForm {
    pub resume: ResumeUpload,
    /// `None` when the field is absent or blank.
    pub job_description: Option<String>,
}

/// Reads the `resume` file and optional `job_description` text out of a
/// multipart body and validates the file. Unknown fields are ignored.
pub async fn read_upload_form(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> Result<UploadForm, AppError> {
    let mut resume = None;
    let mut job_description = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, "Malformed multipart body", max_upload_bytes))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| read_error(e, "Could not read resume", max_upload_bytes))?;
                resume = Some(ResumeUpload {
                    filename,
                    content_type,
                    content,
                });
            }
            JOB_DESCRIPTION_FIELD => {
                let text = field.text().await.map_err(|e| {
                    read_error(e, "Could not read job_description", max_upload_bytes)
                })?;
                job_description = Some(text).filter(|t| !t.trim().is_empty());
            }
            other => debug!(field = other, "Ignoring unexpected multipart field"),
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("Missing 'resume' file field".to_string()))?;
    validate_resume(&resume, max_upload_bytes)?;

    Ok(UploadForm {
        resume,
        job_description,
    })
}

/// Content type must be on the allow-list; size must not exceed the ceiling.
pub fn validate_resume(resume: &ResumeUpload, max_upload_bytes: usize) -> Result<(), AppError> {
    let allowed = resume
        .content_type
        .as_deref()
        .is_some_and(|ct| ALLOWED_CONTENT_TYPES.contains(&ct));
    if !allowed {
        return Err(AppError::Validation(
            "Invalid file type. Use PDF, DOCX, or TXT.".to_string(),
        ));
    }

    if resume.content.len() > max_upload_bytes {
        return Err(too_large(max_upload_bytes));
    }

    Ok(())
}

fn too_large(max_upload_bytes: usize) -> AppError {
    AppError::Validation(format!(
        "File too large. Max {}.",
        describe_limit(max_upload_bytes)
    ))
}

/// Whole megabytes when the ceiling is an exact multiple, bytes otherwise.
fn describe_limit(bytes: usize) -> String {
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}

/// A body that overruns the request limit mid-read is reported like any
/// other oversize file.
fn read_error(err: MultipartError, context: &str, max_upload_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return too_large(max_upload_bytes);
    }
    AppError::Validation(format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    fn upload(content_type: Option<&str>, size: usize) -> ResumeUpload {
        ResumeUpload {
            filename: "resume.pdf".to_string(),
            content_type: content_type.map(str::to_string),
            content: Bytes::from(vec![b'x'; size]),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_allowed_types_pass() {
        for ct in ALLOWED_CONTENT_TYPES {
            assert!(validate_resume(&upload(Some(*ct), 10), DEFAULT_MAX_UPLOAD_BYTES).is_ok());
        }
    }

    #[test]
    fn test_disallowed_or_missing_type_is_rejected() {
        let err = validate_resume(&upload(Some("image/png"), 10), DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(
            message(err.unwrap_err()),
            "Invalid file type. Use PDF, DOCX, or TXT."
        );
        assert!(validate_resume(&upload(None, 10), DEFAULT_MAX_UPLOAD_BYTES).is_err());
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let at_limit = upload(Some("application/pdf"), DEFAULT_MAX_UPLOAD_BYTES);
        assert!(validate_resume(&at_limit, DEFAULT_MAX_UPLOAD_BYTES).is_ok());

        let over = upload(Some("application/pdf"), DEFAULT_MAX_UPLOAD_BYTES + 1);
        let err = validate_resume(&over, DEFAULT_MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(message(err), "File too large. Max 5MB.");
    }

    #[test]
    fn test_small_limits_are_reported_in_bytes() {
        let over = upload(Some("text/plain"), 17);
        let err = validate_resume(&over, 16).unwrap_err();
        assert_eq!(message(err), "File too large. Max 16 bytes.");
    }

    #[test]
    fn test_describe_limit() {
        assert_eq!(describe_limit(5 * MIB), "5MB");
        assert_eq!(describe_limit(MIB + MIB / 2), "1572864 bytes");
        assert_eq!(describe_limit(512 * 1024), "524288 bytes");
    }
}
