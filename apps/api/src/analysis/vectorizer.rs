//! Bag-of-words term counting over a small corpus.
//!
//! Text is lowercased, split into runs of two or more word characters, and
//! filtered against the English stop-word list. The vocabulary is sorted
//! alphabetically and shared by every document in the corpus.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::analysis::stop_words::is_stop_word;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorizeError {
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,
}

/// Lowercased, stop-word-filtered tokens of `text`, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

/// Sparse document-term count matrix. Each row is sorted by term index.
#[derive(Debug, Clone)]
pub struct TermCountMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<(usize, u32)>>,
}

impl TermCountMatrix {
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Result<Self, VectorizeError> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: HashMap<usize, u32> = HashMap::new();
                for token in tokens {
                    *counts.entry(index[token.as_str()]).or_insert(0) += 1;
                }
                let mut row: Vec<(usize, u32)> = counts.into_iter().collect();
                row.sort_unstable_by_key(|&(term, _)| term);
                row
            })
            .collect();

        Ok(Self { vocabulary, rows })
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, idx: usize) -> &[(usize, u32)] {
        &self.rows[idx]
    }

    /// Total count of each vocabulary term across all documents.
    pub fn column_totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.vocabulary.len()];
        for row in &self.rows {
            for &(term, count) in row {
                totals[term] += u64::from(count);
            }
        }
        totals
    }
}

/// Cosine similarity of two sparse count rows. A zero vector scores 0.
pub fn cosine_similarity(a: &[(usize, u32)], b: &[(usize, u32)]) -> f64 {
    let norm = |row: &[(usize, u32)]| {
        row.iter()
            .map(|&(_, c)| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt()
    };
    let (norm_a, norm_b) = (norm(a), norm(b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += f64::from(a[i].1) * f64::from(b[j].1);
                i += 1;
                j += 1;
            }
        }
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        assert_eq!(
            tokenize("We are looking for a Rust engineer in C"),
            vec!["looking", "rust", "engineer"]
        );
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("DOCKER Docker docker"), vec!["docker"; 3]);
    }

    #[test]
    fn test_vocabulary_is_sorted_and_shared() {
        let m = TermCountMatrix::fit_transform(&["zeta alpha", "beta alpha"]).unwrap();
        assert_eq!(m.vocabulary(), &["alpha", "beta", "zeta"]);
        assert_eq!(m.len(), 2);
        assert_eq!(m.row(0), &[(0, 1), (2, 1)]);
    }

    #[test]
    fn test_column_totals() {
        let m = TermCountMatrix::fit_transform(&["rust rust go", "rust"]).unwrap();
        // vocabulary: go, rust
        assert_eq!(m.column_totals(), vec![1, 3]);
    }

    #[test]
    fn test_empty_vocabulary_is_error() {
        let err = TermCountMatrix::fit_transform(&["the and of", "a"]).unwrap_err();
        assert_eq!(err, VectorizeError::EmptyVocabulary);
    }

    #[test]
    fn test_cosine_identical_is_one() {
        let m = TermCountMatrix::fit_transform(&["rust python", "rust python"]).unwrap();
        assert!((cosine_similarity(m.row(0), m.row(1)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_disjoint_is_zero() {
        let m = TermCountMatrix::fit_transform(&["rust", "python"]).unwrap();
        assert_eq!(cosine_similarity(m.row(0), m.row(1)), 0.0);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let m = TermCountMatrix::fit_transform(&["the", "python"]).unwrap();
        assert_eq!(cosine_similarity(m.row(0), m.row(1)), 0.0);
    }
}
