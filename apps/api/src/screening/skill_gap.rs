use std::collections::BTreeSet;

use crate::errors::AppError;
use crate::screening::tagger::{Pos, PosTagger};

/// Distinct lowercase tokens tagged as common nouns.
pub async fn noun_set(tagger: &dyn PosTagger, text: &str) -> Result<BTreeSet<String>, AppError> {
    Ok(tagger
        .tag(text)
        .await?
        .into_iter()
        .filter(|t| t.pos == Pos::Noun)
        .map(|t| t.text.to_lowercase())
        .collect())
}

/// Job nouns absent from the resume, sorted alphabetically.
pub async fn missing_skills(
    tagger: &dyn PosTagger,
    resume: &str,
    job: &str,
) -> Result<Vec<String>, AppError> {
    let resume_nouns = noun_set(tagger, resume).await?;
    let job_nouns = noun_set(tagger, job).await?;

    Ok(job_nouns.difference(&resume_nouns).cloned().collect())
}
