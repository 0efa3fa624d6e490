use crate::reader::TextReader;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Reads UTF-8 text files as-is
pub struct PlainTextReader;

impl TextReader for PlainTextReader {
    fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}
