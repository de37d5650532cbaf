//! Deterministic stand-ins for the model-backed language backends.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::screening::embedding::SentenceEmbedder;
use crate::screening::tagger::{Pos, PosTagger, TaggedToken};

/// One dimension per group; words in the same group are synonyms.
const CONCEPTS: &[&[&str]] = &[
    &["physician", "doctor", "clinician"],
    &["car", "automobile", "vehicle"],
    &["rust", "rustacean"],
    &["engineer", "developer", "programmer"],
    &["kubernetes", "k8s", "cluster"],
    &["pastry", "chef", "baker"],
    &["python", "pandas"],
    &["data", "analyst", "analytics"],
];

/// Counts words per concept group. Unknown words add nothing.
pub struct ConceptEmbedder;

#[async_trait]
impl SentenceEmbedder for ConceptEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AppError> {
        let mut vector = vec![0.0_f32; CONCEPTS.len()];
        for word in words(text) {
            if let Some(dim) = CONCEPTS.iter().position(|group| group.contains(&word.as_str())) {
                vector[dim] += 1.0;
            }
        }
        Ok(vector)
    }

    fn backend(&self) -> &'static str {
        "concept-table"
    }
}

const LEXICON: &[(&str, Pos)] = &[
    ("i", Pos::Pron),
    ("we", Pos::Pron),
    ("the", Pos::Det),
    ("and", Pos::Cconj),
    ("have", Pos::Verb),
    ("need", Pos::Verb),
    ("include", Pos::Verb),
    ("writing", Pos::Verb),
    ("reviewing", Pos::Verb),
    ("configures", Pos::Verb),
    ("monitors", Pos::Verb),
    ("kubernetes", Pos::Propn),
    ("aws", Pos::Propn),
];

/// Looks words up in a fixed table; anything else is a common noun.
pub struct TableTagger;

#[async_trait]
impl PosTagger for TableTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, AppError> {
        Ok(text
            .split_whitespace()
            .flat_map(|raw| {
                let word = raw.trim_end_matches(|c: char| c.is_ascii_punctuation());
                let punct = &raw[word.len()..];

                let mut tokens = Vec::new();
                if !word.is_empty() {
                    let lower = word.to_lowercase();
                    let pos = LEXICON
                        .iter()
                        .find(|(w, _)| *w == lower)
                        .map(|(_, p)| *p)
                        .unwrap_or(Pos::Noun);
                    tokens.push(TaggedToken {
                        text: word.to_string(),
                        pos,
                    });
                }
                if !punct.is_empty() {
                    tokens.push(TaggedToken {
                        text: punct.to_string(),
                        pos: Pos::Punct,
                    });
                }
                tokens
            })
            .collect())
    }

    fn backend(&self) -> &'static str {
        "lexicon-table"
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
