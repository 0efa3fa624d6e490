use crate::error::Failure;
use crate::format::Format;
use crate::reader::Readers;
use crate::validate;
use std::path::PathBuf;

/// One text extraction job, built once from the command line
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub path: PathBuf,
    pub format_token: String,
}

impl ExtractionRequest {
    pub fn new(path: impl Into<PathBuf>, format_token: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format_token: format_token.into(),
        }
    }
}

/// Route the request to the reader for its format and validate the result.
///
/// Unknown format tokens are rejected before anything touches the filesystem.
pub fn extract(request: ExtractionRequest, readers: &Readers) -> Result<String, Failure> {
    let format = Format::from_token(&request.format_token)
        .ok_or_else(|| Failure::UnsupportedFormat(request.format_token.to_lowercase()))?;

    tracing::debug!(
        path = %request.path.display(),
        format = format.label(),
        "dispatching extraction"
    );

    let raw = readers
        .for_format(format)
        .extract(&request.path)
        .map_err(|e| Failure::engine(format.label(), &e))?;

    let text = validate::validate(raw)?;
    tracing::info!(chars = text.chars().count(), "extraction complete");
    Ok(text)
}
