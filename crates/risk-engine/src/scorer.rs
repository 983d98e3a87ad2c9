//! Derives per-finding severities and the normalized overall risk score

use crate::catalog::ClauseRule;
use crate::error::AnalysisError;
use shared_types::{ClauseStatus, ContractType, Finding, Severity};

/// Derive the severity of one finding from its rule's base severity.
///
/// Absent clauses score at the rule's configured maximum, weak clauses one
/// tier below, and present clauses record an informational `None` that never
/// contributes to the score.
pub fn severity_for(base: Severity, status: ClauseStatus) -> Severity {
    match status {
        ClauseStatus::Absent => base,
        ClauseStatus::Weak => base.step_down(),
        ClauseStatus::Present => Severity::None,
    }
}

/// Score a full finding set against its rule table.
///
/// Returns the findings with severities filled in plus the overall score:
/// the weighted severity sum normalized to 0-100 against the maximum
/// possible for this rule table, which keeps scores comparable across
/// contract types with different rule counts.
pub fn score(
    contract_type: ContractType,
    rules: &[ClauseRule],
    mut findings: Vec<Finding>,
) -> Result<(f64, Vec<Finding>), AnalysisError> {
    if rules.is_empty() {
        return Err(AnalysisError::EmptyRuleSet(
            contract_type.name().to_string(),
        ));
    }
    if findings.len() != rules.len() {
        return Err(AnalysisError::InconsistentReportInput(format!(
            "{} findings for {} rules in {} catalog",
            findings.len(),
            rules.len(),
            contract_type.name()
        )));
    }

    let mut total = 0u32;
    for (rule, finding) in rules.iter().zip(findings.iter_mut()) {
        finding.severity = severity_for(rule.severity, finding.status);
        total += finding.severity.points();
    }

    let max: u32 = rules.iter().map(|r| r.severity.points()).sum();
    if max == 0 {
        return Err(AnalysisError::EmptyRuleSet(
            contract_type.name().to_string(),
        ));
    }

    let raw = 100.0 * f64::from(total) / f64::from(max);
    Ok(((raw * 10.0).round() / 10.0, findings))
}
