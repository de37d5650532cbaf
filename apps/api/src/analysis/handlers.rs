//! Axum route handlers for the CSV analysis endpoints.

use axum::extract::Multipart;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::classify::{categorize, recommend_roles, LabelCounts};
use crate::analysis::keywords::{top_terms, SkillCount, TOP_SKILLS_LIMIT};
use crate::analysis::matching::{rank_top, score_against_resume, TOP_MATCHES_LIMIT};
use crate::analysis::vectorizer::VectorizeError;
use crate::dataset::handlers::PREVIEW_ROWS;
use crate::dataset::ingest::decode_lossy;
use crate::dataset::load_with_description;
use crate::dataset::models::{Cell, Record};
use crate::dataset::upload::UploadForm;
use crate::errors::{AppError, Reported};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub top_skills: Vec<SkillCount>,
    pub job_category_counts: LabelCounts,
    pub preview: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub role_counts: LabelCounts,
    pub preview: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub top_matches: Vec<Record>,
}

impl From<VectorizeError> for AppError {
    fn from(e: VectorizeError) -> Self {
        AppError::UnprocessableEntity(e.to_string())
    }
}

/// Unwraps a dataset load or returns its in-band error payload.
macro_rules! load_or_report {
    ($bytes:expr, $subject:expr) => {
        match load_with_description($bytes) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!("{} rejected: {e}", $subject);
                return Ok(Reported::Failure(e.report($subject)));
            }
        }
    };
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Top description keywords plus a single-label category per row.
pub async fn handle_analyze(multipart: Multipart) -> Result<Reported<AnalyzeResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let file = form.take("file")?;
    let (mut dataset, desc_col) = load_or_report!(&file.bytes, "CSV");

    let texts = dataset.column_text(&desc_col).unwrap_or_default();
    let top_skills = top_terms(&texts, TOP_SKILLS_LIMIT)?;

    let categories: Vec<&'static str> = texts.iter().map(|t| categorize(t)).collect();
    let job_category_counts = LabelCounts::tally(categories.iter().copied()).sorted_by_count();
    dataset.set_column(
        "category",
        categories.iter().map(|c| Cell::Text(c.to_string())).collect(),
    );

    info!(rows = dataset.len(), column = %desc_col, "Analyzed job descriptions");
    debug!("Category counts: {:?}", job_category_counts.entries());

    Ok(Reported::Success(AnalyzeResponse {
        top_skills,
        job_category_counts,
        preview: dataset.head(PREVIEW_ROWS),
    }))
}

/// POST /recommend
///
/// Multi-label role recommendation per row with aggregate role counts.
pub async fn handle_recommend(
    multipart: Multipart,
) -> Result<Reported<RecommendResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let file = form.take("file")?;
    let (mut dataset, desc_col) = load_or_report!(&file.bytes, "CSV");

    let texts = dataset.column_text(&desc_col).unwrap_or_default();
    let recommendations: Vec<Vec<&'static str>> =
        texts.iter().map(|t| recommend_roles(t)).collect();
    let role_counts = LabelCounts::tally(recommendations.iter().flatten().copied());

    dataset.set_column(
        "recommended_roles",
        recommendations
            .iter()
            .map(|roles| Cell::List(roles.iter().map(|r| r.to_string()).collect()))
            .collect(),
    );

    info!(rows = dataset.len(), column = %desc_col, "Recommended roles");

    Ok(Reported::Success(RecommendResponse {
        role_counts,
        preview: dataset.head(PREVIEW_ROWS),
    }))
}

/// POST /match
///
/// Ranks job rows against an uploaded resume by term-count cosine similarity
/// and returns the best five.
pub async fn handle_match(multipart: Multipart) -> Result<Reported<MatchResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let resume = form.take("resume")?;
    let jobs = form.take("jobs")?;

    let resume_text = decode_lossy(&resume.bytes);
    let (mut dataset, desc_col) = load_or_report!(&jobs.bytes, "Jobs CSV");

    let texts = dataset.column_text(&desc_col).unwrap_or_default();
    let scores = score_against_resume(&resume_text, &texts)?;
    let top = rank_top(&scores, TOP_MATCHES_LIMIT);

    dataset.set_column("match_score", scores.into_iter().map(Cell::Float).collect());

    info!(jobs = dataset.len(), returned = top.len(), "Matched resume against jobs");

    Ok(Reported::Success(MatchResponse {
        top_matches: dataset.records_at(&top),
    }))
}
