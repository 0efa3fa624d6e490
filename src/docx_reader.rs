use crate::reader::TextReader;
use anyhow::{Context, Result};
use docx_rust::document::{BodyContent, Paragraph, ParagraphContent, Run, RunContent};
use docx_rust::DocxFile;
use std::path::Path;

/// Reads the body paragraphs of a DOCX document through `docx-rust`
pub struct DocxReader;

impl TextReader for DocxReader {
    fn extract(&self, path: &Path) -> Result<String> {
        // DocxFile owns the raw archive; the parsed Docx borrows from it
        let file = DocxFile::from_file(path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Failed to open DOCX: {}", path.display()))?;
        let docx = file
            .parse()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to parse DOCX content")?;

        let paragraphs: Vec<String> = docx
            .document
            .body
            .content
            .iter()
            .filter_map(|content| match content {
                BodyContent::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        tracing::debug!(paragraphs = paragraphs.len(), "DOCX text extracted");
        Ok(paragraphs.join("\n"))
    }
}

/// Plain text of one paragraph, including hyperlink display text
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for pc in &para.content {
        match pc {
            ParagraphContent::Run(run) => push_run_text(&mut text, run),
            ParagraphContent::Link(link) => {
                if let Some(ref run) = link.content {
                    push_run_text(&mut text, run);
                }
            }
            _ => {}
        }
    }

    text
}

fn push_run_text(out: &mut String, run: &Run) {
    for rc in &run.content {
        match rc {
            RunContent::Text(t) => out.push_str(&t.text),
            RunContent::Break(_) => out.push('\n'),
            RunContent::Tab(_) => out.push('\t'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rejects_non_zip_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"plain bytes, not an office document").unwrap();

        assert!(DocxReader.extract(file.path()).is_err());
    }

    #[test]
    fn open_failure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DocxReader
            .extract(&dir.path().join("missing.docx"))
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to open DOCX: "));
        assert!(err.to_string().contains("missing.docx"));
    }
}
