use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::model::AnalysisReport;
use crate::export::Exporter;

/// Writes the full analysis as `report.json` for downstream tooling.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, report: &AnalysisReport) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("failed to create output dir: {}", self.out_dir.display()))?;
        let path = self.out_dir.join("report.json");
        let data = serde_json::to_string_pretty(report)?;
        fs::write(&path, data).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
