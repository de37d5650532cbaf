use crate::analysis::vectorizer::{cosine_similarity, TermCountMatrix, VectorizeError};

pub const TOP_MATCHES_LIMIT: usize = 5;

/// Cosine similarity of the resume against each job text, in job order.
/// Resume and jobs share one vocabulary.
pub fn score_against_resume<S: AsRef<str>>(
    resume: &str,
    jobs: &[S],
) -> Result<Vec<f64>, VectorizeError> {
    let mut corpus: Vec<&str> = Vec::with_capacity(jobs.len() + 1);
    corpus.push(resume);
    corpus.extend(jobs.iter().map(|job| job.as_ref()));

    let matrix = TermCountMatrix::fit_transform(&corpus)?;
    let resume_row = matrix.row(0);

    Ok((1..matrix.len())
        .map(|idx| cosine_similarity(resume_row, matrix.row(idx)))
        .collect())
}

/// Indices of the `limit` highest scores, best first; equal scores keep row order.
pub fn rank_top(scores: &[f64], limit: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(limit);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_follow_job_order() {
        let jobs = ["rust backend services", "pastry chef", "rust"];
        let scores = score_against_resume("Rust engineer", &jobs).unwrap();
        assert_eq!(scores.len(), 3);
        assert!(scores[2] > scores[0]);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_scores_case_insensitive() {
        let lower = score_against_resume("python docker", &["docker kubernetes"]).unwrap();
        let upper = score_against_resume("PYTHON Docker", &["DOCKER Kubernetes"]).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let scores =
            score_against_resume("data data ml", &["data", "ml ml", "unrelated words"]).unwrap();
        assert!(scores.iter().all(|s| (0.0..=1.0 + 1e-12).contains(s)));
    }

    #[test]
    fn test_rank_top_descending_and_stable() {
        let order = rank_top(&[0.2, 0.9, 0.2, 0.5], 3);
        assert_eq!(order, vec![1, 3, 0]);
    }

    #[test]
    fn test_rank_top_with_fewer_rows_than_limit() {
        assert_eq!(rank_top(&[0.1, 0.3], TOP_MATCHES_LIMIT), vec![1, 0]);
    }
}
