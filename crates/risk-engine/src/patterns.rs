//! Text normalization and excerpt helpers shared by all catalog rules
//!
//! Catalog patterns are matched against a case-folded, whitespace-collapsed
//! copy of the document. Excerpts and spans are always taken from the
//! original text, so normalization never leaks into the report.

/// Minimum number of words in the sentence around a match for the clause to
/// count as substantive rather than an incidental keyword mention
pub const MIN_CLAUSE_WORDS: usize = 6;

/// Padding on each side of a match when extracting an excerpt
pub const EXCERPT_PADDING: usize = 60;

/// Case-folded, whitespace-collapsed view of a document that can map match
/// offsets back to the original text
pub struct NormalizedText {
    pub text: String,
    offsets: Vec<usize>,
    source_len: usize,
}

/// Normalize a document for matching: lowercase every character and collapse
/// whitespace runs to a single space
pub fn normalize(source: &str) -> NormalizedText {
    let mut text = String::with_capacity(source.len());
    let mut offsets = Vec::with_capacity(source.len());

    for (idx, ch) in source.char_indices() {
        if ch.is_whitespace() {
            // Collapse runs, drop leading whitespace
            if !text.is_empty() && !text.ends_with(' ') {
                text.push(' ');
                offsets.push(idx);
            }
        } else {
            for low in ch.to_lowercase() {
                let before = text.len();
                text.push(low);
                for _ in before..text.len() {
                    offsets.push(idx);
                }
            }
        }
    }

    if text.ends_with(' ') {
        text.pop();
        offsets.pop();
    }

    NormalizedText {
        text,
        offsets,
        source_len: source.len(),
    }
}

impl NormalizedText {
    /// Map a byte range in the normalized text back onto the original text.
    /// Both returned offsets are char boundaries in the source.
    pub fn original_span(&self, start: usize, end: usize) -> (usize, usize) {
        let orig_start = self.offsets.get(start).copied().unwrap_or(self.source_len);
        let orig_end = self.offsets.get(end).copied().unwrap_or(self.source_len);
        (orig_start, orig_end.max(orig_start))
    }
}

/// Extract a snippet around a matched span, keeping the original casing and
/// wording. Ellipses mark truncation on either side.
pub fn extract_excerpt(source: &str, start: usize, end: usize) -> String {
    let mut lo = start.saturating_sub(EXCERPT_PADDING);
    while lo > 0 && !source.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = end.saturating_add(EXCERPT_PADDING).min(source.len());
    while hi < source.len() && !source.is_char_boundary(hi) {
        hi += 1;
    }

    let snippet = source[lo..hi].trim();
    let mut out = String::with_capacity(snippet.len() + 6);
    if lo > 0 {
        out.push_str("...");
    }
    out.push_str(snippet);
    if hi < source.len() {
        out.push_str("...");
    }
    out
}

/// The sentence containing `pos`, bounded by terminal punctuation
pub fn sentence_around(text: &str, pos: usize) -> &str {
    let is_terminal = |c: char| matches!(c, '.' | '!' | '?' | '\n');
    let start = text[..pos].rfind(is_terminal).map(|i| i + 1).unwrap_or(0);
    let end = text[pos..]
        .find(is_terminal)
        .map(|i| pos + i)
        .unwrap_or(text.len());
    &text[start..end]
}
