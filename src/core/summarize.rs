use std::collections::HashSet;

use crate::core::frequency::{build_frequency_table, score_sentences};
use crate::core::segment::SentenceSegmenter;

/// Summary selection bounds.
#[derive(Debug, Clone, Copy)]
pub struct SummaryConfig {
    /// Fraction of the document's sentences to keep.
    pub ratio: f64,
    /// Hard cap on the number of selected sentences.
    pub max_sentences: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            ratio: 0.2,
            max_sentences: 12,
        }
    }
}

/// Frequency-based extractive summarizer. Sentences are ranked by summed
/// word weight, but the emitted summary keeps original document order.
#[derive(Debug, Default)]
pub struct Summarizer {
    config: SummaryConfig,
    segmenter: SentenceSegmenter,
}

impl Summarizer {
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    pub fn with_config(config: SummaryConfig) -> Self {
        Self {
            config,
            segmenter: SentenceSegmenter::new(),
        }
    }

    /// Produces the summary as newline-joined sentences. Degenerate input
    /// falls back instead of failing: empty text returns an empty string,
    /// three or fewer sentences return the trimmed original, and a document
    /// with no scorable words returns a plain prefix of its sentences.
    pub fn summarize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let sentences = self.segmenter.segment(text);
        if sentences.len() <= 3 {
            return text.trim().to_string();
        }

        let table = build_frequency_table(text);
        if table.is_empty() {
            return sentences
                .iter()
                .take(self.config.max_sentences)
                .cloned()
                .collect::<Vec<_>>()
                .join("\n");
        }

        let mut ranked = score_sentences(&sentences, &table);
        // stable sort: equal scores keep first-seen document order
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let target = self.target_count(sentences.len());
        let selected: HashSet<&str> = ranked
            .iter()
            .take(target)
            .map(|scored| scored.text.as_str())
            .collect();

        sentences
            .iter()
            .filter(|sentence| selected.contains(sentence.as_str()))
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `max(1, min(max_sentences, ceil(count * ratio)))`. The clamp keeps
    /// out-of-range ratio or max_sentences values degenerate but harmless.
    fn target_count(&self, sentence_count: usize) -> usize {
        let by_ratio = (sentence_count as f64 * self.config.ratio).ceil() as usize;
        self.config.max_sentences.min(by_ratio).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn position_of(sentences: &[String], line: &str) -> usize {
        sentences
            .iter()
            .position(|s| s == line)
            .expect("summary line should come from the segmented document")
    }

    #[test]
    fn empty_input_returns_empty_summary() {
        let summarizer = Summarizer::new();
        assert_eq!(summarizer.summarize(""), "");
        assert_eq!(summarizer.summarize("   \n\t  "), "");
    }

    #[test]
    fn short_document_passes_through_verbatim() {
        let summarizer = Summarizer::new();
        let text = "Hi there friend. Yes indeed today. Okay go now.";
        assert_eq!(summarizer.summarize(text), text);
    }

    #[test]
    fn short_document_passthrough_is_trimmed() {
        let summarizer = Summarizer::new();
        let text = "  Hi there friend. Yes indeed today. Okay go now.  ";
        assert_eq!(summarizer.summarize(text), text.trim());
    }

    #[test]
    fn unscorable_document_falls_back_to_prefix() {
        let summarizer = Summarizer::with_config(SummaryConfig {
            ratio: 0.2,
            max_sentences: 2,
        });
        // every token is a single character, so the table stays empty
        let text = "a b c d e f. a b c d e g. a b c d e h. a b c d e i.";
        let summary = summarizer.summarize(text);
        assert_eq!(summary, "a b c d e f.\na b c d e g.");
    }

    #[test]
    fn summary_never_exceeds_max_sentences() {
        let summarizer = Summarizer::with_config(SummaryConfig {
            ratio: 0.9,
            max_sentences: 2,
        });
        let text = "서버 응답 캐시 구조 설명입니다. 캐시 갱신 주기 설명입니다. \
                    디스크 사용량 측정 결과입니다. 네트워크 지연 측정 결과입니다. \
                    결론 요약 정리 부분입니다.";
        let summary = summarizer.summarize(text);
        assert!(summary.lines().count() <= 2);
    }

    #[test]
    fn ratio_bounds_selection_size() {
        let summarizer = Summarizer::with_config(SummaryConfig {
            ratio: 0.25,
            max_sentences: 12,
        });
        let text = "첫번째 문장 하나 추가합니다. 두번째 문장 하나 추가합니다. \
                    세번째 문장 하나 추가합니다. 네번째 문장 하나 추가합니다. \
                    다섯째 문장 하나 추가합니다. 여섯째 문장 하나 추가합니다. \
                    일곱째 문장 하나 추가합니다. 여덟째 문장 하나 추가합니다.";
        let summary = summarizer.summarize(text);
        // ceil(8 * 0.25) = 2
        assert!(summary.lines().count() <= 2);
        assert!(!summary.is_empty());
    }

    #[test]
    fn selected_sentences_keep_document_order() {
        let summarizer = Summarizer::with_config(SummaryConfig {
            ratio: 0.5,
            max_sentences: 3,
        });
        let text = "배경 설명이 먼저 나오는 도입 문장입니다. \
                    캐시 계층 구조는 핵심 주제입니다. \
                    중간에 잠시 다른 이야기가 끼어듭니다. \
                    캐시 계층 구조 덕분에 캐시 적중률이 오릅니다. \
                    마지막으로 캐시 계층 구조를 정리합니다.";
        let summary = summarizer.summarize(text);
        let sentences = SentenceSegmenter::new().segment(text);

        let mut last = 0;
        for line in summary.lines() {
            let position = position_of(&sentences, line);
            assert!(position >= last);
            last = position;
        }
    }

    #[test]
    fn target_count_floors_at_one() {
        let summarizer = Summarizer::with_config(SummaryConfig {
            ratio: 0.01,
            max_sentences: 12,
        });
        let text = "캐시 적중률 측정 문장입니다. 디스크 지연 측정 문장입니다. \
                    메모리 사용 측정 문장입니다. 지연 분포 측정 문장입니다.";
        let summary = summarizer.summarize(text);
        assert_eq!(summary.lines().count(), 1);
    }
}
