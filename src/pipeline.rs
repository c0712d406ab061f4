use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::core::headings::HeadingDetector;
use crate::core::model::{AnalysisReport, DocumentStats, Lang};
use crate::core::segment::SentenceSegmenter;
use crate::core::summarize::{Summarizer, SummaryConfig};
use crate::export::{Exporter, JsonExporter, TextExporter};
use crate::extract::normalize::{clean_extracted_text, has_decomposed_hangul};
use crate::extract::{PdfTextExtractor, TextExtractor};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: SummaryConfig,
    pub lang: Lang,
    pub with_summary: bool,
    pub with_toc: bool,
}

impl PipelineConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            summary: SummaryConfig::default(),
            lang: Lang::default(),
            with_summary: true,
            with_toc: true,
        }
    }
}

/// Runs the analysis half of the pipeline: extract the text layer, clean it
/// up, then derive the summary and the TOC from the same immutable text.
pub fn analyze_document(config: &PipelineConfig) -> Result<AnalysisReport> {
    let extractor = PdfTextExtractor::new();
    let raw = extractor.extract(&config.input)?;
    let text = clean_extracted_text(&raw);

    if text.trim().is_empty() {
        anyhow::bail!(
            "no text could be extracted from {}",
            config.input.display()
        );
    }
    if has_decomposed_hangul(&text) {
        warn!(
            "{} still contains isolated Hangul jamo after cleanup, tokenization may degrade",
            config.input.display()
        );
    }

    Ok(build_report(config, &text))
}

fn build_report(config: &PipelineConfig, text: &str) -> AnalysisReport {
    let lines: Vec<&str> = text.lines().collect();
    let sentence_count = SentenceSegmenter::new().segment(text).len();
    info!(
        "analyzing {}: {} lines, {} sentences",
        config.input.display(),
        lines.len(),
        sentence_count
    );

    let summary = if config.with_summary {
        let summarizer = Summarizer::with_config(config.summary);
        Some(summarizer.summarize(text))
    } else {
        None
    };

    let detector = HeadingDetector::new(config.lang);
    let (headings, toc) = if config.with_toc {
        let headings = detector.detect(&lines);
        debug!("{} heading candidates", headings.len());
        let toc = detector.format_toc(&headings);
        (headings, Some(toc))
    } else {
        (Vec::new(), None)
    };

    let stats = DocumentStats {
        chars: text.chars().count(),
        lines: lines.len(),
        sentences: sentence_count,
        headings: headings.len(),
    };

    AnalysisReport {
        source: config.input.display().to_string(),
        summary,
        toc,
        headings,
        stats,
    }
}

/// Persists the report: flat-text artifacts plus the JSON report.
pub fn export_analysis(report: &AnalysisReport, output: &Path) -> Result<()> {
    TextExporter::new(output.to_path_buf())
        .export(report)
        .with_context(|| format!("failed to export text artifacts to {}", output.display()))?;

    JsonExporter::new(output.to_path_buf())
        .export(report)
        .with_context(|| format!("failed to export report.json to {}", output.display()))?;

    Ok(())
}
