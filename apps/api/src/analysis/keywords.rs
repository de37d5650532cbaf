use serde::Serialize;

use crate::analysis::vectorizer::{TermCountMatrix, VectorizeError};

pub const TOP_SKILLS_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

/// Ranks vocabulary terms by total count across `documents`, descending.
/// Equal counts keep alphabetical order.
pub fn top_terms<S: AsRef<str>>(
    documents: &[S],
    limit: usize,
) -> Result<Vec<SkillCount>, VectorizeError> {
    let matrix = TermCountMatrix::fit_transform(documents)?;

    let mut ranked: Vec<SkillCount> = matrix
        .vocabulary()
        .iter()
        .zip(matrix.column_totals())
        .map(|(term, count)| SkillCount {
            skill: term.clone(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);

    Ok(ranked)
}
