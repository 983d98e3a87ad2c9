//! Clause catalogs per contract type
//!
//! Each contract-type module declares the ordered list of expected clause
//! categories and their detection rules. Declaration order is significant:
//! it is the reading order of the underlying legal checklist and breaks
//! severity ties in the final report.

pub mod employment;
pub mod nda;
pub mod service_agreement;

use crate::error::AnalysisError;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ContractType, Severity};

/// Detection rule for one expected clause category.
///
/// Patterns and qualifiers are matched against the case-folded,
/// whitespace-collapsed document, so their sources are written in lowercase.
/// The qualifier list holds alternative phrasings of one mandatory modifier:
/// if none of them appears anywhere in the document, a matching clause is
/// downgraded to weak.
#[derive(Debug)]
pub struct ClauseRule {
    pub category: &'static str,
    pub group: &'static str,
    pub severity: Severity,
    pub patterns: Vec<Regex>,
    pub synonyms: &'static [&'static str],
    pub qualifiers: Vec<Regex>,
    pub advice_missing: &'static str,
    pub advice_weak: &'static str,
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn rule(
    category: &'static str,
    group: &'static str,
    severity: Severity,
    patterns: &[&str],
    synonyms: &'static [&'static str],
    qualifiers: &[&str],
    advice_missing: &'static str,
    advice_weak: &'static str,
) -> ClauseRule {
    let compile = |src: &&str| Regex::new(src).expect("invalid catalog pattern");
    ClauseRule {
        category,
        group,
        severity,
        patterns: patterns.iter().map(compile).collect(),
        synonyms,
        qualifiers: qualifiers.iter().map(compile).collect(),
        advice_missing,
        advice_weak,
    }
}

lazy_static! {
    static ref NDA_RULES: Vec<ClauseRule> = nda::rules();
    static ref SERVICE_AGREEMENT_RULES: Vec<ClauseRule> = service_agreement::rules();
    static ref EMPLOYMENT_RULES: Vec<ClauseRule> = employment::rules();
}

/// Get the ordered clause rules for a contract type
pub fn rules_for(contract_type: ContractType) -> Result<&'static [ClauseRule], AnalysisError> {
    let rules: &'static [ClauseRule] = match contract_type {
        ContractType::Nda => NDA_RULES.as_slice(),
        ContractType::ServiceAgreement => SERVICE_AGREEMENT_RULES.as_slice(),
        ContractType::EmploymentAgreement => EMPLOYMENT_RULES.as_slice(),
    };
    if rules.is_empty() {
        return Err(AnalysisError::UnknownContractType(
            contract_type.name().to_string(),
        ));
    }
    Ok(rules)
}

/// Startup validation: every supported contract type must carry a non-empty
/// rule table with unique category names
pub fn validate() -> Result<(), AnalysisError> {
    for contract_type in ContractType::all() {
        let rules = rules_for(contract_type)
            .map_err(|_| AnalysisError::EmptyRuleSet(contract_type.name().to_string()))?;
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|r| r.category == rule.category) {
                return Err(AnalysisError::InconsistentReportInput(format!(
                    "duplicate category `{}` in {} catalog",
                    rule.category,
                    contract_type.name()
                )));
            }
        }
    }
    Ok(())
}

/// List the clause categories covered for a contract type, in declaration order
pub fn covered_categories(contract_type: ContractType) -> Vec<&'static str> {
    rules_for(contract_type)
        .map(|rules| rules.iter().map(|r| r.category).collect())
        .unwrap_or_default()
}

// ============================================================================
// Shared rules reused across contract types
// ============================================================================

pub(crate) fn governing_law() -> ClauseRule {
    rule(
        "governing law",
        "Legal",
        Severity::Medium,
        &[
            r"governing law",
            r"governed by",
            r"jurisdiction",
            r"applicable law",
        ],
        &["venue"],
        &[],
        "Specify governing law and jurisdiction for dispute resolution",
        "Name both the governing law and the forum for disputes, not just one in passing",
    )
}

pub(crate) fn confidentiality() -> ClauseRule {
    rule(
        "confidentiality",
        "Confidentiality",
        Severity::Medium,
        &[
            r"confidential",
            r"proprietary",
            r"non.?disclos",
            r"trade secrets?",
        ],
        &[],
        &[],
        "Add confidentiality clauses to protect sensitive information",
        "Expand the confidentiality language into a full clause covering scope and obligations",
    )
}

pub(crate) fn severability() -> ClauseRule {
    rule(
        "severability",
        "Legal",
        Severity::Low,
        &[r"severab", r"invalid.{0,60}provision", r"unenforceable"],
        &[],
        &[],
        "Add severability clause to preserve agreement if one provision is invalid",
        "State expressly that remaining provisions survive if one is held invalid",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_contract_type_has_rules() {
        for contract_type in ContractType::all() {
            let rules = rules_for(contract_type).unwrap();
            assert!(!rules.is_empty(), "{} has no rules", contract_type);
        }
    }

    #[test]
    fn test_catalog_validates() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_categories_unique_per_type() {
        for contract_type in ContractType::all() {
            let categories = covered_categories(contract_type);
            let mut sorted = categories.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), categories.len(), "{}", contract_type);
        }
    }

    #[test]
    fn test_shared_rules_registered_everywhere() {
        for contract_type in ContractType::all() {
            let categories = covered_categories(contract_type);
            assert!(categories.contains(&"governing law"), "{}", contract_type);
            assert!(categories.contains(&"severability"), "{}", contract_type);
        }
    }

    #[test]
    fn test_advice_unique_per_type() {
        // Recommendation dedup keys on the suggestion text, so two rules in
        // the same table must never share one
        for contract_type in ContractType::all() {
            let rules = rules_for(contract_type).unwrap();
            let mut advice: Vec<&str> = rules
                .iter()
                .flat_map(|r| [r.advice_missing, r.advice_weak])
                .collect();
            let total = advice.len();
            advice.sort_unstable();
            advice.dedup();
            assert_eq!(advice.len(), total, "{}", contract_type);
        }
    }

    #[test]
    fn test_rules_carry_remediation_text() {
        for contract_type in ContractType::all() {
            for rule in rules_for(contract_type).unwrap() {
                assert!(!rule.advice_missing.is_empty(), "{}", rule.category);
                assert!(!rule.advice_weak.is_empty(), "{}", rule.category);
                assert!(
                    !rule.patterns.is_empty() || !rule.synonyms.is_empty(),
                    "{} has no indicators",
                    rule.category
                );
            }
        }
    }
}
