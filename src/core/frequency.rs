use std::collections::{HashMap, HashSet};

use crate::core::model::ScoredSentence;

/// Tokens shorter than this never enter the frequency table.
const MIN_TOKEN_CHARS: usize = 2;

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '가'..='힣')
}

/// Lowercased word tokens. Everything except ASCII alphanumerics and Hangul
/// syllables acts as a separator, which strips punctuation and the glyph
/// noise PDF extraction leaves behind.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect();
    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Normalized word weights over the whole document: occurrence count divided
/// by the maximum count, so every weight lies in (0, 1] and the most frequent
/// word weighs exactly 1.0. Empty when no token of length >= 2 exists.
pub fn build_frequency_table(text: &str) -> HashMap<String, f64> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokenize(text) {
        if token.chars().count() < MIN_TOKEN_CHARS {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let Some(&max_count) = counts.values().max() else {
        return HashMap::new();
    };

    counts
        .into_iter()
        .map(|(word, count)| (word, f64::from(count) / f64::from(max_count)))
        .collect()
}

/// Scores each sentence as the sum of its tokens' table weights; tokens
/// absent from the table contribute nothing, so single-character tokens are
/// implicitly weightless here. Sentences with no tokens or a score of zero
/// are dropped. Duplicate sentence texts collapse to a single entry keyed by
/// text (first occurrence wins); the result keeps first-seen order.
pub fn score_sentences(sentences: &[String], table: &HashMap<String, f64>) -> Vec<ScoredSentence> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut scored = Vec::new();

    for sentence in sentences {
        if !seen.insert(sentence.as_str()) {
            continue;
        }
        let tokens = tokenize(sentence);
        if tokens.is_empty() {
            continue;
        }
        let score: f64 = tokens
            .iter()
            .map(|token| table.get(token).copied().unwrap_or(0.0))
            .sum();
        if score <= 0.0 {
            continue;
        }
        scored.push(ScoredSentence {
            text: sentence.clone(),
            score,
        });
    }

    scored
}
