//! Evaluates one catalog rule against one document
//!
//! Matching runs over a normalized view of the text; excerpts and spans are
//! mapped back to the original so the report never shows altered text.
//! Evaluation is deterministic and rules never observe each other's results.

use crate::catalog::ClauseRule;
use crate::patterns::{self, NormalizedText, MIN_CLAUSE_WORDS};
use shared_types::{ClauseStatus, Finding, Severity, TextSpan};

/// Evaluate a single rule, producing exactly one finding.
///
/// - `Absent`: no required pattern or synonym appears anywhere.
/// - `Weak`: an indicator appears but every occurrence is an incidental
///   mention (sentence shorter than [`MIN_CLAUSE_WORDS`]), or the rule's
///   mandatory qualifier is missing from the document.
/// - `Present`: at least one substantive occurrence and the qualifier, if
///   the rule has one, appears.
pub fn evaluate(text: &str, rule: &ClauseRule) -> Finding {
    let normalized = patterns::normalize(text);

    let (first, first_substantive) = scan(&normalized, rule);

    let Some(first) = first else {
        return Finding {
            category: rule.category.to_string(),
            group: rule.group.to_string(),
            status: ClauseStatus::Absent,
            severity: Severity::None,
            excerpt: None,
            span: None,
        };
    };

    let qualifier_met = rule.qualifiers.is_empty()
        || rule.qualifiers.iter().any(|q| q.is_match(&normalized.text));

    let status = if qualifier_met && first_substantive.is_some() {
        ClauseStatus::Present
    } else {
        ClauseStatus::Weak
    };

    // Anchor the excerpt on the best occurrence we found
    let (start, end) = first_substantive.unwrap_or(first);
    let (orig_start, orig_end) = normalized.original_span(start, end);

    Finding {
        category: rule.category.to_string(),
        group: rule.group.to_string(),
        status,
        severity: Severity::None,
        excerpt: Some(patterns::extract_excerpt(text, orig_start, orig_end)),
        span: Some(TextSpan {
            start_offset: orig_start,
            end_offset: orig_end,
        }),
    }
}

/// Scan all indicators and report the earliest match and the earliest match
/// sitting in a substantive sentence
fn scan(
    normalized: &NormalizedText,
    rule: &ClauseRule,
) -> (Option<(usize, usize)>, Option<(usize, usize)>) {
    let mut first: Option<(usize, usize)> = None;
    let mut first_substantive: Option<(usize, usize)> = None;

    let mut consider = |start: usize, end: usize| {
        if first.map_or(true, |(s, _)| start < s) {
            first = Some((start, end));
        }
        let sentence = patterns::sentence_around(&normalized.text, start);
        if sentence.split_whitespace().count() >= MIN_CLAUSE_WORDS
            && first_substantive.map_or(true, |(s, _)| start < s)
        {
            first_substantive = Some((start, end));
        }
    };

    for pattern in &rule.patterns {
        for hit in pattern.find_iter(&normalized.text) {
            consider(hit.start(), hit.end());
        }
    }
    for synonym in rule.synonyms {
        for (pos, matched) in normalized.text.match_indices(synonym) {
            consider(pos, pos + matched.len());
        }
    }

    (first, first_substantive)
}
