use serde::Serialize;
use thiserror::Error;

/// Coarse failure category, one per user-visible error path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    UsageError,
    UnsupportedFormat,
    ExtractionEngineFailure,
    EmptyExtraction,
    EmptyForNarration,
    AudioGenerationFailure,
}

/// Every way an extraction or narration run can fail.
///
/// The `Display` output is the message written to the `error` field of the
/// JSON envelope, so engine diagnostics are carried through untouched.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("{0}")]
    Usage(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("{format} extraction failed: {message}")]
    ExtractionEngine {
        format: &'static str,
        message: String,
    },

    #[error("No meaningful text could be extracted from the file")]
    EmptyExtraction,

    #[error("Text is too short for audio generation")]
    EmptyForNarration,

    #[error("Audio generation failed: {0}")]
    AudioGeneration(String),
}

impl Failure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Failure::Usage(_) => ErrorKind::UsageError,
            Failure::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Failure::ExtractionEngine { .. } => ErrorKind::ExtractionEngineFailure,
            Failure::EmptyExtraction => ErrorKind::EmptyExtraction,
            Failure::EmptyForNarration => ErrorKind::EmptyForNarration,
            Failure::AudioGeneration(_) => ErrorKind::AudioGenerationFailure,
        }
    }

    /// Wrap an engine error, keeping its whole context chain in the message
    pub(crate) fn engine(format: &'static str, err: &anyhow::Error) -> Self {
        Failure::ExtractionEngine {
            format,
            message: format!("{:#}", err),
        }
    }
}
