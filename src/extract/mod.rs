pub mod normalize;
pub mod pdf;

pub use pdf::PdfTextExtractor;

use anyhow::Result;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}
