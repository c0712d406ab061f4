use serde::{Deserialize, Serialize};

/// Document language, selects the section-name vocabulary used by heading
/// detection. Output artifact strings stay in Korean either way.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ko,
    En,
}

/// A heading candidate: 1-based line number plus the trimmed line text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
    pub line: usize,
    pub text: String,
}

/// A sentence with its accumulated frequency weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredSentence {
    pub text: String,
    pub score: f64,
}

/// Everything derived from one document in a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc: Option<String>,
    pub headings: Vec<Heading>,
    pub stats: DocumentStats,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DocumentStats {
    pub chars: usize,
    pub lines: usize,
    pub sentences: usize,
    pub headings: usize,
}
