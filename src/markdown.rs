use crate::error::Failure;

/// Shortest normalized text, in characters, worth sending to the synthesizer
pub const MIN_NARRATION_CHARS: usize = 10;

/// Markdown punctuation that would otherwise be read aloud
const MARKUP_CHARS: [char; 6] = ['#', '*', '_', '`', '[', ']'];

/// Prepare markdown for speech: drop emphasis, heading and link punctuation
/// and collapse all whitespace (newlines included) to single spaces.
pub fn normalize(text: &str) -> Result<String, Failure> {
    let stripped: String = text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect();
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.chars().count() < MIN_NARRATION_CHARS {
        return Err(Failure::EmptyForNarration);
    }
    Ok(cleaned)
}
