// Job-description analytics over an uploaded dataset:
// keyword counts, rule-table classification, and resume matching.

pub mod classify;
pub mod handlers;
pub mod keywords;
pub mod matching;
pub mod stop_words;
pub mod vectorizer;
