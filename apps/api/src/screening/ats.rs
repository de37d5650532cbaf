/// Points per satisfied check.
pub const POINTS_PER_CHECK: u32 = 25;
/// A resume must be longer than this many characters to earn the length points.
pub const MIN_RESUME_CHARS: usize = 500;
/// Case-insensitive sections each worth [`POINTS_PER_CHECK`].
pub const SECTION_KEYWORDS: &[&str] = &["experience", "skills", "education"];

/// Heuristic ATS score: 25 points each for length and for each section keyword.
/// Always a multiple of 25 in `0..=100`.
pub fn score_resume(resume: &str) -> u32 {
    let lowered = resume.to_lowercase();

    let long_enough = resume.chars().count() > MIN_RESUME_CHARS;
    let sections = SECTION_KEYWORDS
        .iter()
        .filter(|k| lowered.contains(*k))
        .count();

    (u32::from(long_enough) + sections as u32) * POINTS_PER_CHECK
}
