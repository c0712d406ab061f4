use regex::Regex;

/// Rough segments shorter than this many characters are merged into the
/// following sentence instead of standing alone.
const MIN_SENTENCE_CHARS: usize = 10;

/// Splits raw document text into sentences.
///
/// PDF text layers break lines mid-sentence, so the input is flattened into
/// a single stream before punctuation-based splitting. Works on mixed
/// Korean/English text; Korean sentences end in `.`/`?`/`!` as well.
#[derive(Debug)]
pub struct SentenceSegmenter {
    boundary: Regex,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        // Sentence-final punctuation followed by whitespace. The punctuation
        // stays attached to the preceding segment.
        Self {
            boundary: Regex::new(r"[.!?]\s+").expect("hardcoded boundary pattern"),
        }
    }

    /// Returns the document's sentences in original order. Short fragments
    /// ("Fig. 3." artifacts, stray initials) are carried in a pending buffer
    /// and prepended to the next full sentence; a trailing buffer is emitted
    /// as the final sentence. No returned sentence is empty.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let flattened = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let mut sentences = Vec::new();
        let mut buffer = String::new();

        for rough in self.rough_segments(&flattened) {
            let segment = rough.trim();
            if segment.is_empty() {
                continue;
            }
            if segment.chars().count() < MIN_SENTENCE_CHARS {
                if !buffer.is_empty() {
                    buffer.push(' ');
                }
                buffer.push_str(segment);
            } else if buffer.is_empty() {
                sentences.push(segment.to_string());
            } else {
                buffer.push(' ');
                buffer.push_str(segment);
                sentences.push(std::mem::take(&mut buffer));
            }
        }

        if !buffer.is_empty() {
            sentences.push(buffer);
        }

        sentences
    }

    /// First-pass split at sentence-final punctuation. The trailing
    /// whitespace run is consumed; the remainder after the last boundary is
    /// the final segment.
    fn rough_segments<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut segments = Vec::new();
        let mut start = 0;
        for boundary in self.boundary.find_iter(text) {
            // the punctuation char is single-byte ASCII
            let end = boundary.start() + 1;
            segments.push(&text[start..end]);
            start = boundary.end();
        }
        if start < text.len() {
            segments.push(&text[start..]);
        }
        segments
    }
}
