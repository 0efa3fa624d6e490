use crate::reader::TextReader;
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

pub const DEFAULT_TESSERACT: &str = "tesseract";
pub const DEFAULT_OCR_LANG: &str = "eng";

/// OCR through the `tesseract` command-line engine.
///
/// The image is decoded first so unreadable or corrupt files fail with the
/// decoder's diagnostic instead of whatever tesseract prints. The decoder is
/// chosen from the file's bytes; the path's extension plays no part.
pub struct ImageReader {
    command: String,
    language: String,
}

impl ImageReader {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }
}

impl Default for ImageReader {
    fn default() -> Self {
        Self::new(DEFAULT_TESSERACT, DEFAULT_OCR_LANG)
    }
}

impl TextReader for ImageReader {
    fn extract(&self, path: &Path) -> Result<String> {
        let img = image::io::Reader::open(path)?
            .with_guessed_format()?
            .decode()?;
        tracing::debug!(
            width = img.width(),
            height = img.height(),
            engine = %self.command,
            "running OCR"
        );

        let output = Command::new(&self.command)
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run {}", self.command))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{} exited with {}: {}", self.command, output.status, stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn corrupt_image_fails_before_ocr() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"definitely not a png").unwrap();

        // A command that cannot exist proves the decoder rejected the file first
        let reader = ImageReader::new("no-such-ocr-engine-binary", "eng");
        let err = reader.extract(file.path()).unwrap_err();
        assert!(!err.to_string().contains("no-such-ocr-engine-binary"));
    }

    /// Executable shell script standing in for tesseract
    #[cfg(unix)]
    fn fake_engine(dir: &Path, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("fake-tesseract");
        std::fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script.to_string_lossy().into_owned()
    }

    #[cfg(unix)]
    #[test]
    fn decodes_by_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fake_engine(dir.path(), "echo recognised text here");

        let named = dir.path().join("scan.png");
        image::RgbImage::new(4, 4).save(&named).unwrap();
        let upload = dir.path().join("upload-12345");
        std::fs::copy(&named, &upload).unwrap();

        let reader = ImageReader::new(engine, "eng");
        assert_eq!(reader.extract(&named).unwrap(), "recognised text here\n");
        assert_eq!(reader.extract(&upload).unwrap(), "recognised text here\n");
    }

    #[cfg(unix)]
    #[test]
    fn engine_stderr_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fake_engine(dir.path(), "echo 'Failed loading language' >&2; exit 1");

        let path = dir.path().join("scan.png");
        image::RgbImage::new(4, 4).save(&path).unwrap();

        let err = ImageReader::new(engine, "xyz").extract(&path).unwrap_err();
        assert!(err.to_string().contains("Failed loading language"));
    }

    #[test]
    fn missing_engine_is_reported() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        image::RgbImage::new(4, 4).save(file.path()).unwrap();

        let reader = ImageReader::new("no-such-ocr-engine-binary", "eng");
        let err = reader.extract(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to run no-such-ocr-engine-binary"));
    }
}
