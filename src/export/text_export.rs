use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::model::AnalysisReport;
use crate::export::Exporter;

/// Writes the flat-text artifacts: `summary.txt` and `toc.txt`. Artifacts
/// the run skipped (summary-only / toc-only) are simply not written.
#[derive(Debug, Clone)]
pub struct TextExporter {
    out_dir: PathBuf,
}

impl TextExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for TextExporter {
    fn export(&self, report: &AnalysisReport) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("failed to create output dir: {}", self.out_dir.display()))?;

        if let Some(summary) = &report.summary {
            let path = self.out_dir.join("summary.txt");
            fs::write(&path, summary)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }

        if let Some(toc) = &report.toc {
            let path = self.out_dir.join("toc.txt");
            fs::write(&path, toc).with_context(|| format!("failed to write {}", path.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::DocumentStats;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_output_dir(prefix: &str) -> PathBuf {
        let mut out = std::env::temp_dir();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let pid = std::process::id();
        out.push(format!("{prefix}-{pid}-{now}"));
        out
    }

    fn report(summary: Option<&str>, toc: Option<&str>) -> AnalysisReport {
        AnalysisReport {
            source: "sample.pdf".to_string(),
            summary: summary.map(str::to_string),
            toc: toc.map(str::to_string),
            headings: vec![],
            stats: DocumentStats {
                chars: 0,
                lines: 0,
                sentences: 0,
                headings: 0,
            },
        }
    }

    #[test]
    fn writes_both_artifacts() -> Result<()> {
        let out = temp_output_dir("docbrief-text-export");
        let exporter = TextExporter::new(out.clone());
        exporter.export(&report(Some("요약 본문"), Some("목차 본문")))?;

        assert_eq!(fs::read_to_string(out.join("summary.txt"))?, "요약 본문");
        assert_eq!(fs::read_to_string(out.join("toc.txt"))?, "목차 본문");

        let _ = fs::remove_dir_all(&out);
        Ok(())
    }

    #[test]
    fn skipped_artifacts_are_not_written() -> Result<()> {
        let out = temp_output_dir("docbrief-toc-only");
        let exporter = TextExporter::new(out.clone());
        exporter.export(&report(None, Some("목차 본문")))?;

        assert!(!out.join("summary.txt").exists());
        assert!(out.join("toc.txt").exists());

        let _ = fs::remove_dir_all(&out);
        Ok(())
    }
}
