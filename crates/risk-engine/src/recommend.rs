//! Maps gaps and weaknesses to remediation suggestions
//!
//! Suggestion text is templated per category and status, so identical input
//! always produces identical output.

use crate::catalog::ClauseRule;
use shared_types::{ClauseStatus, Finding, Recommendation};
use std::collections::HashSet;

/// Emit one recommendation per non-present finding, deduplicated and ordered
/// severity-descending. Equal severities keep catalog declaration order, so
/// the expected input is the scored findings in declaration order.
pub fn recommend(rules: &[ClauseRule], findings: &[Finding]) -> Vec<Recommendation> {
    let mut seen: HashSet<&'static str> = HashSet::new();
    let mut recommendations = Vec::new();

    for (rule, finding) in rules.iter().zip(findings) {
        let suggestion = match finding.status {
            ClauseStatus::Present => continue,
            ClauseStatus::Weak => rule.advice_weak,
            ClauseStatus::Absent => rule.advice_missing,
        };
        if !seen.insert(suggestion) {
            continue;
        }
        recommendations.push(Recommendation {
            category: finding.category.clone(),
            severity: finding.severity,
            suggestion: suggestion.to_string(),
        });
    }

    // Stable sort: declaration order survives within each severity tier
    recommendations.sort_by(|a, b| b.severity.points().cmp(&a.severity.points()));
    recommendations
}
