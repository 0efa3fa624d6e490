use crate::docx_reader::DocxReader;
use crate::format::Format;
use crate::image_reader::ImageReader;
use crate::pdf_reader::PdfReader;
use crate::text_reader::PlainTextReader;
use anyhow::Result;
use std::path::Path;

/// Trait for pulling raw text out of one document format (PDF, DOCX, etc.)
pub trait TextReader {
    /// Read the file at `path` and return whatever text the engine produced
    fn extract(&self, path: &Path) -> Result<String>;
}

/// One reader per supported format.
///
/// Fields are trait objects so tests can swap in fakes without touching
/// the dispatch logic.
pub struct Readers {
    pub pdf: Box<dyn TextReader>,
    pub docx: Box<dyn TextReader>,
    pub image: Box<dyn TextReader>,
    pub text: Box<dyn TextReader>,
}

impl Readers {
    /// Default engines, with OCR settings supplied by the caller
    pub fn new(image: ImageReader) -> Self {
        Self {
            pdf: Box::new(PdfReader),
            docx: Box::new(DocxReader),
            image: Box::new(image),
            text: Box::new(PlainTextReader),
        }
    }

    pub fn for_format(&self, format: Format) -> &dyn TextReader {
        match format {
            Format::Pdf => self.pdf.as_ref(),
            Format::Docx => self.docx.as_ref(),
            Format::Image => self.image.as_ref(),
            Format::Text => self.text.as_ref(),
        }
    }
}

impl Default for Readers {
    fn default() -> Self {
        Self::new(ImageReader::default())
    }
}
