use crate::reader::TextReader;
use anyhow::{Context, Result};
use pdf_oxide::PdfDocument;
use std::path::Path;

/// Page-by-page text extraction through `pdf_oxide`
pub struct PdfReader;

impl TextReader for PdfReader {
    fn extract(&self, path: &Path) -> Result<String> {
        let doc = PdfDocument::open(path).map_err(|e| anyhow::anyhow!("{}", e))?;

        let page_count = doc
            .page_count()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to read page count")?;

        let mut text = String::new();
        for page_index in 0..page_count {
            let page_text = doc
                .extract_text(page_index)
                .map_err(|e| anyhow::anyhow!("{}", e))
                .with_context(|| format!("Failed to read page {}", page_index + 1))?;

            // Pages without a text layer contribute nothing, not even a newline
            if !page_text.is_empty() {
                text.push_str(&page_text);
                text.push('\n');
            }
        }

        tracing::debug!(page_count, chars = text.len(), "PDF text extracted");
        Ok(text)
    }
}
