use serde::Serialize;

/// Estimated narration time per whitespace-delimited word.
///
/// Fixed heuristic; it is not derived from the synthesized audio.
pub const SECONDS_PER_WORD: f64 = 0.5;

/// A markdown heading promoted to a narration unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    /// Always empty: segmentation does not collect body text
    pub content: String,
    /// Estimated start time in seconds
    pub timestamp: f64,
    pub level: usize,
}

/// Split markdown into chapters, one per titled heading, each stamped with
/// the estimated time at which narration reaches it.
///
/// The level is the character count of the heading's first token, so
/// `###Title` (no space) measures as level 8. Existing consumers rely on
/// this, so it is kept.
pub fn segment(markdown: &str) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut position = 0.0_f64;

    for line in markdown.split('\n') {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }

        if stripped.starts_with('#') {
            let level = stripped
                .split_whitespace()
                .next()
                .map(|token| token.chars().count())
                .unwrap_or(0);
            let title = stripped.trim_start_matches('#').trim();

            // A bare `###` still counts towards the running position
            if !title.is_empty() {
                chapters.push(Chapter {
                    id: format!("chapter-{}", chapters.len()),
                    title: title.to_string(),
                    content: String::new(),
                    timestamp: position,
                    level,
                });
            }
        }

        position += stripped.split_whitespace().count() as f64 * SECONDS_PER_WORD;
    }

    tracing::debug!(chapters = chapters.len(), seconds = position, "markdown segmented");
    chapters
}
