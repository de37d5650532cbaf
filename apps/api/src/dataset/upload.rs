use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// A single file part from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field: String,
    pub filename: Option<String>,
    pub bytes: Bytes,
}

/// All parts of a multipart form, read eagerly and looked up by field name.
#[derive(Debug, Default)]
pub struct UploadForm {
    files: Vec<UploadedFile>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut files = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let filename = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(|e| {
                AppError::Validation(format!("Failed to read multipart field '{name}': {e}"))
            })?;

            files.push(UploadedFile {
                field: name,
                filename,
                bytes,
            });
        }

        Ok(Self { files })
    }

    /// Removes and returns the part named `field`; a missing part is a 422.
    pub fn take(&mut self, field: &str) -> Result<UploadedFile, AppError> {
        let idx = self
            .files
            .iter()
            .position(|f| f.field == field)
            .ok_or_else(|| {
                AppError::UnprocessableEntity(format!("Missing multipart field '{field}'"))
            })?;
        Ok(self.files.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: &[&str]) -> UploadForm {
        UploadForm {
            files: fields
                .iter()
                .map(|f| UploadedFile {
                    field: f.to_string(),
                    filename: Some(format!("{f}.csv")),
                    bytes: Bytes::from_static(b"a,b\n"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_take_returns_named_field() {
        let mut form = form(&["resume", "jobs"]);
        let jobs = form.take("jobs").unwrap();
        assert_eq!(jobs.filename.as_deref(), Some("jobs.csv"));
        assert!(form.take("jobs").is_err());
        assert!(form.take("resume").is_ok());
    }

    #[test]
    fn test_take_missing_field_is_unprocessable() {
        let mut form = form(&[]);
        assert!(matches!(
            form.take("file"),
            Err(AppError::UnprocessableEntity(_))
        ));
    }
}
