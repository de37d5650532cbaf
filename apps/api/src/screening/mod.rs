// Resume screening on raw text: heuristic ATS score, noun-based skill gaps,
// and dense-embedding similarity. The embedder and tagger live in AppState.

pub mod ats;
pub mod embedding;
pub mod handlers;
pub mod semantic;
pub mod skill_gap;
pub mod tagger;

#[cfg(test)]
pub mod testing;
