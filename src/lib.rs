//! Plain-text extraction from PDF, DOCX, image and text files, and
//! Markdown narration with estimated chapter timestamps.

pub mod chapters;
pub mod cli;
pub mod docx_reader;
pub mod error;
pub mod extractor;
pub mod format;
pub mod image_reader;
pub mod logging;
pub mod markdown;
pub mod narrator;
pub mod output;
pub mod pdf_reader;
pub mod reader;
pub mod speech;
pub mod text_reader;
pub mod validate;

pub use chapters::Chapter;
pub use error::{ErrorKind, Failure};
pub use extractor::ExtractionRequest;
pub use narrator::{Narration, NarrationRequest};
