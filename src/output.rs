use crate::chapters::Chapter;
use crate::error::Failure;
use crate::narrator::Narration;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct TextEnvelope<'a> {
    text: &'a str,
    success: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NarrationEnvelope<'a> {
    success: bool,
    chapters: &'a [Chapter],
    audio_path: String,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: String,
    success: bool,
}

/// Usage errors carry no `success` key
#[derive(Serialize)]
struct UsageEnvelope {
    error: String,
}

pub fn failure_json(failure: &Failure) -> serde_json::Result<String> {
    match failure {
        Failure::Usage(_) => serde_json::to_string(&UsageEnvelope {
            error: failure.to_string(),
        }),
        _ => serde_json::to_string(&ErrorEnvelope {
            error: failure.to_string(),
            success: false,
        }),
    }
}

pub fn extraction_json(result: &Result<String, Failure>) -> serde_json::Result<String> {
    match result {
        Ok(text) => serde_json::to_string(&TextEnvelope {
            text,
            success: true,
        }),
        Err(failure) => failure_json(failure),
    }
}

pub fn narration_json(result: &Result<Narration, Failure>) -> serde_json::Result<String> {
    match result {
        Ok(narration) => serde_json::to_string(&NarrationEnvelope {
            success: true,
            chapters: &narration.chapters,
            audio_path: narration.audio_path.to_string_lossy().into_owned(),
        }),
        Err(failure) => failure_json(failure),
    }
}

/// Write one envelope as a single line on stdout
pub fn emit(json: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
