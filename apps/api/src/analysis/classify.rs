//! Keyword-table classification of job description text.
//!
//! Matching is case-insensitive substring containment, so short keywords
//! like `ai` also fire inside longer words (`maintain`, `email`).

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const OTHER_LABEL: &str = "Other";

/// A label and the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Evaluated in order; the first matching rule wins.
pub const CATEGORY_RULES: &[KeywordRule] = &[
    KeywordRule {
        label: "AI / Data Science",
        keywords: &["ai", "machine learning", "data"],
    },
    KeywordRule {
        label: "Web Development",
        keywords: &["frontend", "backend", "web"],
    },
    KeywordRule {
        label: "DevOps / Cloud",
        keywords: &["cloud", "devops", "docker"],
    },
];

/// Every matching rule contributes a role.
pub const ROLE_RULES: &[KeywordRule] = &[
    KeywordRule {
        label: "Data Scientist",
        keywords: &["data", "machine learning", "analytics"],
    },
    KeywordRule {
        label: "AI Engineer",
        keywords: &["ai", "deep learning", "pytorch", "tensorflow"],
    },
    KeywordRule {
        label: "Web Developer",
        keywords: &["html", "css", "javascript", "react", "frontend", "backend"],
    },
    KeywordRule {
        label: "DevOps Engineer",
        keywords: &["docker", "kubernetes", "cloud", "aws"],
    },
    KeywordRule {
        label: "Software Engineer",
        keywords: &["java", "python", "c++", "software"],
    },
];

/// Single-label category. Always returns one of the rule labels or `Other`.
pub fn categorize(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.label)
        .unwrap_or(OTHER_LABEL)
}

/// Multi-label role recommendation in rule order; `["Other"]` when nothing matches.
pub fn recommend_roles(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    let matched: Vec<&'static str> = ROLE_RULES
        .iter()
        .filter(|rule| rule.matches(&lowered))
        .map(|rule| rule.label)
        .collect();

    if matched.is_empty() {
        vec![OTHER_LABEL]
    } else {
        matched
    }
}

/// Label frequencies, serialized as a JSON object in stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelCounts(Vec<(String, usize)>);

impl LabelCounts {
    /// Counts in order of first appearance.
    pub fn tally<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for label in labels {
            match counts.iter_mut().find(|(l, _)| l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label.to_string(), 1)),
            }
        }
        Self(counts)
    }

    /// Reorders by count descending; ties keep first-appearance order.
    pub fn sorted_by_count(mut self) -> Self {
        self.0.sort_by(|a, b| b.1.cmp(&a.1));
        self
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, n)| *n)
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.0
    }
}

impl Serialize for LabelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}
