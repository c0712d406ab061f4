use anyhow::{Context, Result};
use log::warn;
use std::path::Path;

use crate::extract::TextExtractor;

/// Pulls the embedded text layer out of a PDF file.
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read PDF file: {}", path.display()))?;

        let text = pdf_extract::extract_text_from_mem(&bytes)
            .with_context(|| format!("failed to extract text from PDF: {}", path.display()))?;

        if text.trim().is_empty() {
            warn!(
                "no text layer found in {}, document may be scanned",
                path.display()
            );
        }

        Ok(text)
    }
}
