use axum::extract::Multipart;
use serde::Serialize;
use tracing::{info, warn};

use crate::dataset::ingest::parse_csv;
use crate::dataset::models::Record;
use crate::dataset::upload::UploadForm;
use crate::errors::{AppError, Reported};

pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: Option<String>,
    pub rows: usize,
    pub columns: Vec<String>,
    pub preview: Vec<Record>,
}

/// POST /upload
///
/// Parses an uploaded CSV and reports its shape with a short preview.
pub async fn handle_upload(multipart: Multipart) -> Result<Reported<UploadResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let file = form.take("file")?;

    let dataset = match parse_csv(&file.bytes) {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!("CSV read failed for {:?}: {e}", file.filename);
            return Ok(Reported::Failure(e.report("CSV")));
        }
    };

    info!(
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "Parsed upload {:?}",
        file.filename
    );

    Ok(Reported::Success(UploadResponse {
        filename: file.filename,
        rows: dataset.len(),
        columns: dataset.columns().to_vec(),
        preview: dataset.head(PREVIEW_ROWS),
    }))
}
