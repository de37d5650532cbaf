use crate::dataset::models::Dataset;

const DESCRIPTION_MARKERS: &[&str] = &["desc", "description"];

/// Returns the first column (in parser order) whose lowercase name contains
/// a description marker. First match wins, not best match.
pub fn detect_description_column(dataset: &Dataset) -> Option<&str> {
    dataset
        .columns()
        .iter()
        .find(|col| {
            let lowered = col.to_lowercase();
            DESCRIPTION_MARKERS.iter().any(|m| lowered.contains(m))
        })
        .map(String::as_str)
}
