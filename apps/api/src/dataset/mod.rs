// Tabular ingestion shared by every CSV endpoint:
// parsing, description-column detection, and multipart upload handling.

pub mod columns;
pub mod handlers;
pub mod ingest;
pub mod models;
pub mod upload;

use thiserror::Error;

use crate::errors::ErrorPayload;

/// Upload problems reported in-band as `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("{0}")]
    Parse(String),

    #[error("no description column")]
    MissingColumn,
}

impl DatasetError {
    /// Converts to the payload wording used for an upload called `subject`
    /// (e.g. `"CSV"` or `"Jobs CSV"`).
    pub fn report(&self, subject: &str) -> ErrorPayload {
        match self {
            DatasetError::Parse(reason) => ErrorPayload::new(format!("{subject} read failed: {reason}")),
            DatasetError::MissingColumn => {
                ErrorPayload::new(format!("{subject} must contain description column"))
            }
        }
    }
}

/// Parses an upload and locates its description column.
pub fn load_with_description(bytes: &[u8]) -> Result<(models::Dataset, String), DatasetError> {
    let dataset = ingest::parse_csv(bytes)?;
    let column = columns::detect_description_column(&dataset)
        .map(str::to_string)
        .ok_or(DatasetError::MissingColumn)?;
    Ok((dataset, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_wording() {
        let payload = DatasetError::Parse("bad".to_string()).report("Jobs CSV");
        assert_eq!(payload.error, "Jobs CSV read failed: bad");
    }

    #[test]
    fn test_missing_column_wording() {
        let payload = DatasetError::MissingColumn.report("CSV");
        assert_eq!(payload.error, "CSV must contain description column");
    }

    #[test]
    fn test_load_with_description_requires_column() {
        assert_eq!(
            load_with_description(b"title\nEngineer\n").unwrap_err(),
            DatasetError::MissingColumn
        );
    }

    #[test]
    fn test_load_with_description_returns_column() {
        let (ds, col) = load_with_description(b"title,job_description\nA,B\n").unwrap();
        assert_eq!(col, "job_description");
        assert_eq!(ds.len(), 1);
    }
}
