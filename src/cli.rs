use crate::error::Failure;
use crate::extractor::ExtractionRequest;
use crate::image_reader::{ImageReader, DEFAULT_OCR_LANG, DEFAULT_TESSERACT};
use crate::narrator::NarrationRequest;
use crate::output;
use crate::reader::Readers;
use crate::speech::{EspeakSynthesizer, DEFAULT_ESPEAK};
use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Extract plain text from a PDF, DOCX, image or text file
#[derive(Parser, Debug)]
#[command(name = "text-extractor", version, about)]
pub struct ExtractCli {
    /// Path to the input document
    pub file_path: PathBuf,

    /// Declared file type: pdf, docx, jpg, jpeg, png or txt (any case)
    pub file_type: String,

    /// Anything after the file type is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// OCR engine executable used for images
    #[arg(long, env = "DOCNARRATE_TESSERACT", default_value = DEFAULT_TESSERACT)]
    pub tesseract: String,

    /// Tesseract language code for OCR
    #[arg(long, env = "DOCNARRATE_OCR_LANG", default_value = DEFAULT_OCR_LANG)]
    pub ocr_lang: String,
}

impl ExtractCli {
    pub const USAGE: &'static str = "Usage: text-extractor <file_path> <file_type>";

    pub fn request(&self) -> ExtractionRequest {
        ExtractionRequest::new(&self.file_path, &self.file_type)
    }

    pub fn readers(&self) -> Readers {
        Readers::new(ImageReader::new(&self.tesseract, &self.ocr_lang))
    }
}

/// Narrate Markdown to an audio file and list its chapters with timestamps
#[derive(Parser, Debug)]
#[command(name = "tts-generator", version, about)]
pub struct NarrateCli {
    /// Markdown text to narrate
    #[arg(allow_hyphen_values = true)]
    pub markdown_text: String,

    /// Where to write the audio file
    pub output_path: PathBuf,

    /// Anything after the output path is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Speech engine executable
    #[arg(long, env = "DOCNARRATE_ESPEAK", default_value = DEFAULT_ESPEAK)]
    pub espeak: String,
}

impl NarrateCli {
    pub const USAGE: &'static str = "Usage: tts-generator <markdown_text> <output_path>";

    pub fn request(&self) -> NarrationRequest {
        NarrationRequest::new(&self.markdown_text, &self.output_path)
    }

    pub fn synthesizer(&self) -> EspeakSynthesizer {
        EspeakSynthesizer::new(&self.espeak)
    }
}

/// Parse the process arguments, or settle the process outcome.
///
/// `--help` and `--version` print as usual and exit 0. Any other parse
/// error (in practice a missing positional) is reported as a usage envelope
/// on stdout and exits 1.
pub fn parse_or_exit<P: Parser>(usage: &str) -> Result<P, ExitCode> {
    match P::try_parse() {
        Ok(cli) => Ok(cli),
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                let _ = err.print();
                Err(ExitCode::SUCCESS)
            }
            _ => {
                tracing::debug!(error = %err, "invalid arguments");
                let failure = Failure::Usage(usage.to_string());
                report(output::failure_json(&failure));
                Err(ExitCode::FAILURE)
            }
        },
    }
}

/// Write an encoded envelope to stdout, logging if that is impossible
pub fn report(json: serde_json::Result<String>) {
    let written = json
        .map_err(anyhow::Error::from)
        .and_then(|line| output::emit(&line).map_err(anyhow::Error::from));

    if let Err(e) = written {
        tracing::error!(error = %e, "failed to write result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_positionals() {
        let cli = ExtractCli::try_parse_from(["text-extractor", "notes.txt", "TXT"]).unwrap();
        let request = cli.request();

        assert_eq!(request.path, PathBuf::from("notes.txt"));
        assert_eq!(request.format_token, "TXT");
    }

    #[test]
    fn extract_missing_type_is_an_error() {
        let err = ExtractCli::try_parse_from(["text-extractor", "notes.txt"]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn extract_engine_flags() {
        let cli = ExtractCli::try_parse_from([
            "text-extractor",
            "scan.png",
            "png",
            "--tesseract",
            "/opt/bin/tesseract",
            "--ocr-lang",
            "deu",
        ])
        .unwrap();

        assert_eq!(cli.tesseract, "/opt/bin/tesseract");
        assert_eq!(cli.ocr_lang, "deu");
    }

    #[test]
    fn narrate_accepts_markdown_starting_with_hyphen() {
        let cli = NarrateCli::try_parse_from(["tts-generator", "- item one\n- item two", "out.wav"])
            .unwrap();

        assert_eq!(cli.markdown_text, "- item one\n- item two");
        assert_eq!(cli.request().output_path, PathBuf::from("out.wav"));
    }

    #[test]
    fn trailing_arguments_are_ignored() {
        let cli =
            ExtractCli::try_parse_from(["text-extractor", "a.txt", "txt", "extra", "more"]).unwrap();
        assert_eq!(cli.request().path, PathBuf::from("a.txt"));
        assert_eq!(cli.request().format_token, "txt");

        let cli = NarrateCli::try_parse_from(["tts-generator", "# Title", "out.wav", "extra"])
            .unwrap();
        assert_eq!(cli.request().output_path, PathBuf::from("out.wav"));
    }

    #[test]
    fn narrate_missing_output_is_an_error() {
        assert!(NarrateCli::try_parse_from(["tts-generator", "# Title"]).is_err());
    }
}
