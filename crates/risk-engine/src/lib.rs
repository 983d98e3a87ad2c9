pub mod catalog;
pub mod error;
pub mod matcher;
pub mod patterns;
pub mod recommend;
pub mod report;
pub mod scorer;
pub mod stats;

pub use error::AnalysisError;

use shared_types::{ContractType, RiskReport};
use tracing::debug;

/// RiskEngine entry point
///
/// Stateless and synchronous: the clause catalogs are read-only after first
/// access and every intermediate value is local to one call, so a single
/// engine can serve concurrent callers without locking.
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full analysis pipeline on raw contract text.
    ///
    /// Every catalog rule for the contract type yields exactly one finding;
    /// no category is silently dropped. The returned report is owned by the
    /// caller and the engine keeps no reference to it.
    pub fn analyze(
        &self,
        text: &str,
        contract_type: ContractType,
    ) -> Result<RiskReport, AnalysisError> {
        let rules = catalog::rules_for(contract_type)?;
        debug!(
            contract_type = %contract_type,
            rule_count = rules.len(),
            "starting contract analysis"
        );

        let findings = rules
            .iter()
            .map(|rule| matcher::evaluate(text, rule))
            .collect();
        let (overall_score, findings) = scorer::score(contract_type, rules, findings)?;
        let recommendations = recommend::recommend(rules, &findings);
        let statistics = stats::statistics(text);

        let report = report::assemble(
            contract_type,
            findings,
            overall_score,
            recommendations,
            statistics,
        )?;
        debug!(
            score = report.overall_score,
            findings = report.findings.len(),
            recommendations = report.recommendations.len(),
            "analysis complete"
        );
        Ok(report)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::{ClauseStatus, RiskLevel, Severity};

    /// A service agreement template satisfying every catalog category
    const COMPLETE_SERVICE_AGREEMENT: &str = "\
        1. Scope of Services. The Consultant shall perform the services described \
        in the attached Statement of Work, including all deliverables listed there. \
        2. Payment. The Client shall pay the Consultant a fee of $5,000 per month, \
        with each invoice due within 30 days of receipt. Late payments shall accrue \
        a late fee of one percent interest on any overdue balance. \
        3. Limitation of Liability. Each party's aggregate liability under this \
        agreement is limited to the fees paid in the twelve months preceding the claim. \
        4. Termination. Either party may terminate this agreement upon 30 days \
        written notice to the other party. \
        5. Intellectual Property. All work product and intellectual property created \
        under this agreement shall be owned exclusively by the Client. \
        6. Confidentiality. Each party shall keep the other party's confidential \
        information strictly confidential during and after the engagement. \
        7. Indemnification. The Consultant shall indemnify and hold harmless the \
        Client from any third party claims arising from the services. \
        8. Warranties. The Consultant represents and warrants that the services \
        will be performed in a professional and workmanlike manner. \
        9. Governing Law. This agreement shall be governed by the laws of the \
        State of Delaware, and the parties submit to its jurisdiction. \
        10. Force Majeure. Neither party is liable for delays caused by events \
        beyond its reasonable control, including acts of God. \
        11. Amendment. This agreement may be amended only by written consent \
        signed by both parties. \
        12. Severability. If any provision is held invalid or unenforceable, the \
        remaining provisions shall continue in full force and effect.";

    const NDA_WITHOUT_DURATION: &str = "\
        The parties wish to explore a business opportunity together. Each party \
        shall keep all Confidential Information of the other party strictly \
        confidential and shall not disclose it to any third party without prior \
        written consent of the disclosing party.";

    #[test]
    fn test_one_finding_per_rule_for_every_type() {
        let engine = RiskEngine::new();
        for contract_type in ContractType::all() {
            let rules = catalog::rules_for(contract_type).unwrap();
            let report = engine.analyze("some contract text", contract_type).unwrap();
            assert_eq!(report.findings.len(), rules.len(), "{}", contract_type);
        }
    }

    #[test]
    fn test_empty_text_yields_maximal_risk() {
        let engine = RiskEngine::new();
        for contract_type in ContractType::all() {
            let report = engine.analyze("", contract_type).unwrap();
            assert_eq!(report.overall_score, 100.0, "{}", contract_type);
            assert_eq!(report.risk_level, RiskLevel::High);
            assert!(report
                .findings
                .iter()
                .all(|f| f.status == ClauseStatus::Absent));
        }
    }

    #[test]
    fn test_complete_service_agreement_scores_near_zero() {
        let engine = RiskEngine::new();
        let report = engine
            .analyze(COMPLETE_SERVICE_AGREEMENT, ContractType::ServiceAgreement)
            .unwrap();
        assert_eq!(report.overall_score, 0.0, "findings: {:#?}", report.findings);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert!(report
            .findings
            .iter()
            .all(|f| f.status == ClauseStatus::Present));
    }

    #[test]
    fn test_nda_confidentiality_without_duration_is_weak() {
        let engine = RiskEngine::new();
        let report = engine
            .analyze(NDA_WITHOUT_DURATION, ContractType::Nda)
            .unwrap();
        let duration = report
            .findings
            .iter()
            .find(|f| f.category == "confidentiality duration")
            .unwrap();
        assert_eq!(duration.status, ClauseStatus::Weak);
        // Weak sits one tier below the rule's High base severity
        assert_eq!(duration.severity, Severity::Medium);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.category == "confidentiality duration"));
    }

    #[test]
    fn test_removing_a_clause_never_lowers_the_score() {
        let engine = RiskEngine::new();
        let complete = engine
            .analyze(COMPLETE_SERVICE_AGREEMENT, ContractType::ServiceAgreement)
            .unwrap();

        let gutted: String = COMPLETE_SERVICE_AGREEMENT
            .split(". ")
            .filter(|sentence| {
                !sentence.contains("Governing Law") && !sentence.contains("governed by")
            })
            .collect::<Vec<_>>()
            .join(". ");
        let degraded = engine
            .analyze(&gutted, ContractType::ServiceAgreement)
            .unwrap();

        assert!(degraded.overall_score >= complete.overall_score);
        assert!(degraded.overall_score > 0.0);
    }

    #[test]
    fn test_findings_ordered_severity_descending() {
        let engine = RiskEngine::new();
        let report = engine
            .analyze(NDA_WITHOUT_DURATION, ContractType::Nda)
            .unwrap();
        let points: Vec<u32> = report.findings.iter().map(|f| f.severity.points()).collect();
        let mut sorted = points.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(points, sorted);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let engine = RiskEngine::new();
        let first = engine
            .analyze(NDA_WITHOUT_DURATION, ContractType::Nda)
            .unwrap();
        let second = engine
            .analyze(NDA_WITHOUT_DURATION, ContractType::Nda)
            .unwrap();
        assert_eq!(first.findings, second.findings);
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.recommendations, second.recommendations);
    }

    #[test]
    fn test_report_roundtrips_through_json() {
        let engine = RiskEngine::new();
        let report = engine
            .analyze(COMPLETE_SERVICE_AGREEMENT, ContractType::ServiceAgreement)
            .unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let restored: RiskReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, restored);
    }

    #[test]
    fn test_excerpts_quote_the_original_text() {
        let engine = RiskEngine::new();
        let report = engine
            .analyze(NDA_WITHOUT_DURATION, ContractType::Nda)
            .unwrap();
        let definition = report
            .findings
            .iter()
            .find(|f| f.category == "confidential information definition")
            .unwrap();
        let excerpt = definition.excerpt.as_ref().unwrap();
        assert!(
            excerpt.contains("Confidential Information"),
            "excerpt lost original casing: {excerpt}"
        );
    }

    proptest! {
        #[test]
        fn prop_score_stays_in_range(text in ".{0,400}") {
            let report = RiskEngine::new().analyze(&text, ContractType::Nda).unwrap();
            prop_assert!((0.0..=100.0).contains(&report.overall_score));
            let rules = catalog::rules_for(ContractType::Nda).unwrap();
            prop_assert_eq!(report.findings.len(), rules.len());
        }

        #[test]
        fn prop_identical_input_identical_output(text in "[a-z0-9 .,$]{0,300}") {
            let engine = RiskEngine::new();
            let first = engine.analyze(&text, ContractType::ServiceAgreement).unwrap();
            let second = engine.analyze(&text, ContractType::ServiceAgreement).unwrap();
            prop_assert_eq!(first.findings, second.findings);
            prop_assert_eq!(first.overall_score, second.overall_score);
            prop_assert_eq!(first.recommendations, second.recommendations);
        }

        #[test]
        fn prop_recommendations_cover_every_gap(text in "[a-z .]{0,200}") {
            let report = RiskEngine::new()
                .analyze(&text, ContractType::EmploymentAgreement)
                .unwrap();
            for finding in &report.findings {
                if finding.status != ClauseStatus::Present {
                    prop_assert!(
                        report.recommendations.iter().any(|r| r.category == finding.category),
                        "gap without recommendation: {}", finding.category
                    );
                }
            }
        }
    }
}
