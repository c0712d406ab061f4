use unicode_normalization::UnicodeNormalization;

/// Hangul Jamo blocks. Characters still in these ranges after NFC indicate
/// a decomposed syllable the text layer stored with spacing the composer
/// cannot bridge.
fn is_hangul_jamo(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xA960..=0xA97F | 0xD7B0..=0xD7FF
    )
}

/// Cleans up the artifacts PDF text extraction leaves behind: form-feed page
/// delimiters become line breaks, other control characters are dropped, and
/// decomposed Hangul jamo sequences are recomposed into complete syllables
/// via NFC so tokenization sees whole words.
pub fn clean_extracted_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{0C}' => cleaned.push('\n'),
            '\n' | '\r' | '\t' => cleaned.push(c),
            c if c.is_control() => {}
            c => cleaned.push(c),
        }
    }
    cleaned.nfc().collect()
}

/// True when the text still carries isolated jamo after cleanup.
pub fn has_decomposed_hangul(text: &str) -> bool {
    text.chars().any(is_hangul_jamo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomposes_hangul_jamo() {
        // "한" as conjoining jamo, "글" as a precomposed syllable
        let decomposed = "\u{1112}\u{1161}\u{11AB}글";
        assert_eq!(clean_extracted_text(decomposed), "한글");
    }

    #[test]
    fn form_feed_becomes_line_break() {
        assert_eq!(clean_extracted_text("1쪽 끝.\u{0C}2쪽 시작."), "1쪽 끝.\n2쪽 시작.");
    }

    #[test]
    fn strips_stray_control_characters() {
        assert_eq!(clean_extracted_text("a\u{0}b\u{7}c"), "abc");
        assert_eq!(clean_extracted_text("line\nbreak\tkept"), "line\nbreak\tkept");
    }

    #[test]
    fn flags_unbridged_jamo() {
        assert!(has_decomposed_hangul("ㄱ ㅏ"));
        assert!(!has_decomposed_hangul("가나다 abc"));
    }
}
