use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

pub const DEFAULT_ESPEAK: &str = "espeak-ng";

/// espeak-ng's default speaking rate in words per minute
const NORMAL_RATE_WPM: u32 = 175;

/// Turns normalized text into an audio file
pub trait SpeechSynthesizer {
    fn synthesize(&self, text: &str, language: &str, output_path: &Path) -> Result<()>;
}

/// Speech through the `espeak-ng` command-line engine, written as WAV.
///
/// Text goes in over stdin so long documents don't hit argv limits.
pub struct EspeakSynthesizer {
    command: String,
}

impl EspeakSynthesizer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for EspeakSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_ESPEAK)
    }
}

impl SpeechSynthesizer for EspeakSynthesizer {
    fn synthesize(&self, text: &str, language: &str, output_path: &Path) -> Result<()> {
        let mut child = Command::new(&self.command)
            .arg("-v")
            .arg(language)
            .arg("-s")
            .arg(NORMAL_RATE_WPM.to_string())
            .arg("-w")
            .arg(output_path)
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to run {}", self.command))?;

        // Feed stdin from a helper thread so stderr is drained while we write.
        // The engine may quit early (bad voice, bad flags), so a failed write
        // only matters if the engine itself reports success.
        let stdin = child.stdin.take();
        let input = text.to_owned();
        let writer = thread::spawn(move || -> io::Result<()> {
            match stdin {
                Some(mut stdin) => stdin.write_all(input.as_bytes()),
                None => Ok(()),
            }
        });

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "stdin writer panicked")));

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{} exited with {}: {}", self.command, output.status, stderr.trim());
        }
        written.with_context(|| format!("Failed to send text to {}", self.command))?;

        tracing::debug!(path = %output_path.display(), "audio written");
        Ok(())
    }
}
