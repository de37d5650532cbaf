use crate::errors::AppError;
use crate::screening::embedding::{cosine_dense, SentenceEmbedder};

/// Dense-embedding similarity of a resume and a job text as a percentage,
/// rounded to two decimals.
pub async fn semantic_match_score(
    embedder: &dyn SentenceEmbedder,
    resume: &str,
    job: &str,
) -> Result<f64, AppError> {
    let resume_vec = embedder.embed(resume).await?;
    let job_vec = embedder.embed(job).await?;
    let similarity = cosine_dense(&resume_vec, &job_vec)?;

    Ok(round_percentage(similarity))
}

fn round_percentage(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}
