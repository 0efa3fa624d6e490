/// Document formats the extractor knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdf,
    Docx,
    /// Raster images, read through OCR
    Image,
    Text,
}

impl Format {
    /// Resolve a caller-declared file type, ignoring case
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "pdf" => Some(Format::Pdf),
            "docx" => Some(Format::Docx),
            "jpg" | "jpeg" | "png" => Some(Format::Image),
            "txt" => Some(Format::Text),
            _ => None,
        }
    }

    /// Name used as the prefix of engine failure messages
    pub fn label(self) -> &'static str {
        match self {
            Format::Pdf => "PDF",
            Format::Docx => "DOCX",
            Format::Image => "Image",
            Format::Text => "Text",
        }
    }
}
