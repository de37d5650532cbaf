//! Axum route handlers for resume screening on raw text.
//!
//! Inputs arrive as query parameters, e.g. `POST /ats?resume=...`.

use axum::extract::{rejection::QueryRejection, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::screening::ats::score_resume;
use crate::screening::semantic::semantic_match_score;
use crate::screening::skill_gap::missing_skills;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeJobQuery {
    pub resume: String,
    pub job: String,
}

#[derive(Debug, Deserialize)]
pub struct ResumeQuery {
    pub resume: String,
}

#[derive(Debug, Serialize)]
pub struct SemanticMatchResponse {
    pub match_score: f64,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AtsResponse {
    #[serde(rename = "ATS_score")]
    pub ats_score: u32,
}

fn query_or_422<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(q)| q)
        .map_err(|e| AppError::UnprocessableEntity(e.body_text()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /match/semantic
///
/// Dense-embedding similarity of one resume and one job text, 0–100.
pub async fn handle_semantic_match(
    State(state): State<AppState>,
    query: Result<Query<ResumeJobQuery>, QueryRejection>,
) -> Result<Json<SemanticMatchResponse>, AppError> {
    let params = query_or_422(query)?;
    let match_score =
        semantic_match_score(state.embedder.as_ref(), &params.resume, &params.job).await?;

    debug!(match_score, backend = state.embedder.backend(), "Semantic match");
    Ok(Json(SemanticMatchResponse { match_score }))
}

/// POST /skills
///
/// Nouns in the job text that never appear as nouns in the resume.
pub async fn handle_skills(
    State(state): State<AppState>,
    query: Result<Query<ResumeJobQuery>, QueryRejection>,
) -> Result<Json<SkillsResponse>, AppError> {
    let params = query_or_422(query)?;
    let missing_skills = missing_skills(state.tagger.as_ref(), &params.resume, &params.job).await?;

    debug!(missing = missing_skills.len(), "Skill gap computed");
    Ok(Json(SkillsResponse { missing_skills }))
}

/// POST /ats
pub async fn handle_ats(
    query: Result<Query<ResumeQuery>, QueryRejection>,
) -> Result<Json<AtsResponse>, AppError> {
    let params = query_or_422(query)?;
    Ok(Json(AtsResponse {
        ats_score: score_resume(&params.resume),
    }))
}
