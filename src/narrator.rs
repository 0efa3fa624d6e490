use crate::chapters::{self, Chapter};
use crate::error::Failure;
use crate::markdown;
use crate::speech::SpeechSynthesizer;
use std::path::PathBuf;

/// Language tag passed to the synthesizer for every narration
pub const NARRATION_LANGUAGE: &str = "en";

/// One narration job, built once from the command line
#[derive(Debug, Clone)]
pub struct NarrationRequest {
    pub markdown: String,
    pub output_path: PathBuf,
}

impl NarrationRequest {
    pub fn new(markdown: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            markdown: markdown.into(),
            output_path: output_path.into(),
        }
    }
}

#[derive(Debug)]
pub struct Narration {
    pub chapters: Vec<Chapter>,
    pub audio_path: PathBuf,
}

/// Index the markdown's headings, then speak the cleaned text to
/// `output_path`. Either both succeed or the whole run fails.
pub fn narrate(
    request: NarrationRequest,
    synthesizer: &dyn SpeechSynthesizer,
) -> Result<Narration, Failure> {
    let chapters = chapters::segment(&request.markdown);
    let text = markdown::normalize(&request.markdown)?;

    synthesizer
        .synthesize(&text, NARRATION_LANGUAGE, &request.output_path)
        .map_err(|e| Failure::AudioGeneration(format!("{:#}", e)))?;

    tracing::info!(
        chapters = chapters.len(),
        path = %request.output_path.display(),
        "narration complete"
    );

    Ok(Narration {
        chapters,
        audio_path: request.output_path,
    })
}
