use regex::Regex;

use crate::core::model::{Heading, Lang};

/// Trimmed lines shorter than this many bytes are noise, not headings.
/// Measured in UTF-8 bytes so two-syllable section names like "결론" clear
/// the minimum while bare list markers like "1." do not.
const MIN_HEADING_LEN: usize = 3;
/// Trimmed lines longer than this many bytes are body text, not headings.
const MAX_HEADING_LEN: usize = 80;

/// Fixed no-candidates message for the TOC artifact.
pub const NO_CANDIDATES_MESSAGE: &str = "자동으로 추출된 목차 후보가 없습니다.";
const TOC_HEADER: &str = "자동 생성 목차(제목 후보):";
const TOC_SEPARATOR_WIDTH: usize = 40;

/// Rule-based heading detection over raw document lines.
///
/// Patterns are tried in a fixed priority order and the first match wins:
/// numeric outlines ("1. 서론", "1.1 배경"), Roman-numeral outlines
/// ("I. INTRODUCTION"), Korean chapter markers ("제 1 장 서론"), and bare
/// section-name lines ("결론"). The section-name vocabulary follows `lang`.
#[derive(Debug)]
pub struct HeadingDetector {
    patterns: Vec<Regex>,
}

impl Default for HeadingDetector {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}

impl HeadingDetector {
    pub fn new(lang: Lang) -> Self {
        let section_names = match lang {
            Lang::Ko => "서론|결론|본론|참고문헌",
            Lang::En => "introduction|conclusion|body|references",
        };
        let patterns = vec![
            // the trailing dot is optional so both "1. 제목" and "1.1 소제목" match
            Regex::new(r"^\d+(\.\d+)*\.?\s+.+"),
            Regex::new(r"^[IVXLC]+\.\s+.+"),
            Regex::new(r"^제\s*\d+\s*[장절편]\s+.+"),
            Regex::new(&format!(r"^(?i:{section_names})\s*$")),
        ];
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.expect("hardcoded heading pattern"))
                .collect(),
        }
    }

    /// Scans lines with 1-based numbering and returns heading candidates in
    /// line order. Each line is recorded at most once.
    pub fn detect(&self, lines: &[&str]) -> Vec<Heading> {
        let mut headings = Vec::new();
        for (idx, raw_line) in lines.iter().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            if !(MIN_HEADING_LEN..=MAX_HEADING_LEN).contains(&line.len()) {
                continue;
            }
            if self.patterns.iter().any(|pattern| pattern.is_match(line)) {
                headings.push(Heading {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
        }
        headings
    }

    /// Renders detected candidates as the TOC artifact: a header, a dashed
    /// separator, then one `{line:>4}행: {text}` row per candidate.
    pub fn format_toc(&self, headings: &[Heading]) -> String {
        if headings.is_empty() {
            return NO_CANDIDATES_MESSAGE.to_string();
        }

        let mut toc = Vec::with_capacity(headings.len() + 2);
        toc.push(TOC_HEADER.to_string());
        toc.push("-".repeat(TOC_SEPARATOR_WIDTH));
        for heading in headings {
            toc.push(format!("{:>4}행: {}", heading.line, heading.text));
        }
        toc.join("\n")
    }

    /// Full TOC path over raw text: line split, detection, rendering.
    pub fn generate_toc(&self, text: &str) -> String {
        let lines: Vec<&str> = text.lines().collect();
        let headings = self.detect(&lines);
        self.format_toc(&headings)
    }
}
