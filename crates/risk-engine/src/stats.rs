//! Statistical profile of the analyzed document

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ContractStatistics;

lazy_static! {
    static ref SENTENCE_PATTERN: Regex = Regex::new(r"[.!?]+").unwrap();
    /// Numbered section headings like "12." at the start of a line
    static ref SECTION_PATTERN: Regex = Regex::new(r"(?m)^\d+\.").unwrap();
}

/// Compute document statistics.
///
/// Pages assume ~250 words per page, reading time ~200 words per minute,
/// and the complexity score is the word count banded into 1-10.
pub fn statistics(text: &str) -> ContractStatistics {
    let word_count = text.split_whitespace().count();
    ContractStatistics {
        word_count,
        character_count: text.chars().count(),
        sentence_count: SENTENCE_PATTERN.find_iter(text).count(),
        section_count: SECTION_PATTERN.find_iter(text).count(),
        estimated_pages: (word_count / 250).max(1),
        reading_time_minutes: (word_count / 200).max(1),
        complexity_score: (word_count / 200).clamp(1, 10) as u8,
    }
}
