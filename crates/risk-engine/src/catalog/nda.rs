//! Clause catalog for non-disclosure agreements
//!
//! The checklist follows standard mutual-NDA drafting order: what is
//! confidential, who must keep it so, for how long, the carve-outs, and the
//! boilerplate at the end.

use super::{governing_law, rule, severability, ClauseRule};
use shared_types::Severity;

pub fn rules() -> Vec<ClauseRule> {
    vec![
        rule(
            "confidential information definition",
            "Confidentiality",
            Severity::Critical,
            &[
                r"confidential information",
                r"proprietary information",
                r"definition of confidential",
            ],
            &["trade secret", "confidential material"],
            &[],
            "Define what constitutes Confidential Information, including the forms it takes and any marking requirements",
            "Expand the definition of Confidential Information into a full clause enumerating the covered categories",
        ),
        rule(
            "non-disclosure obligations",
            "Confidentiality",
            Severity::Critical,
            &[
                r"shall not disclose?",
                r"agrees? not to disclose?",
                r"non.?disclosure",
                r"duty of confidentiality",
            ],
            &["nondisclosure"],
            &[],
            "State the receiving party's duty not to disclose or misuse Confidential Information",
            "Spell out the non-disclosure duty as an operative obligation rather than a passing reference",
        ),
        // Duration anchors on confidentiality language: a confidentiality
        // clause with no explicit term reads as weak, not absent.
        rule(
            "confidentiality duration",
            "Confidentiality",
            Severity::High,
            &[r"confidential", r"non.?disclos", r"proprietary"],
            &["trade secret"],
            &[
                r"\d+\s*(?:year|month)s?",
                r"in perpetuity",
                r"perpetual",
                r"survives?.{0,50}(?:termination|expiration)",
                r"for the term of",
            ],
            "Add a confidentiality term stating how long non-disclosure obligations last",
            "Specify an explicit duration for confidentiality obligations, such as a fixed number of years or survival after termination",
        ),
        rule(
            "permitted disclosures",
            "Confidentiality",
            Severity::Medium,
            &[
                r"publicly available",
                r"public domain",
                r"independently developed",
                r"required by law",
                r"court order",
            ],
            &["permitted disclosure"],
            &[],
            "Carve out standard exclusions: public information, independent development, and legally compelled disclosure",
            "Turn the carve-out mention into a complete list of exclusions from confidentiality",
        ),
        rule(
            "return of materials",
            "Operational",
            Severity::Medium,
            &[
                r"return.{0,60}(?:materials|documents|information|copies)",
                r"destroy.{0,60}(?:materials|documents|information|copies)",
                r"return or destroy",
            ],
            &[],
            &[],
            "Require return or destruction of Confidential Information when the relationship ends",
            "State when materials must be returned or destroyed and who certifies it",
        ),
        rule(
            "injunctive relief",
            "Legal",
            Severity::Medium,
            &[
                r"injunctive relief",
                r"equitable relief",
                r"irreparable (?:harm|injury)",
                r"specific performance",
            ],
            &[],
            &[],
            "Acknowledge that breach causes irreparable harm and permit injunctive relief",
            "Strengthen the remedies clause so equitable relief is available without proving monetary damages",
        ),
        governing_law(),
        severability(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ClauseStatus;

    #[test]
    fn test_duration_rule_requires_explicit_term() {
        let rules = rules();
        let duration = rules
            .iter()
            .find(|r| r.category == "confidentiality duration")
            .unwrap();
        assert!(!duration.qualifiers.is_empty());
        assert!(duration
            .qualifiers
            .iter()
            .any(|q| q.is_match("obligations survive termination of this agreement")));
        assert!(duration.qualifiers.iter().any(|q| q.is_match("5 years")));
    }

    #[test]
    fn test_declaration_order_starts_with_definition() {
        let rules = rules();
        assert_eq!(rules[0].category, "confidential information definition");
        assert_eq!(rules.last().unwrap().category, "severability");
    }

    #[test]
    fn test_confidentiality_without_duration_is_weak() {
        let text = "Each party shall keep all Confidential Information of the \
                    other party strictly confidential and shall not disclose it \
                    to any third party.";
        let rules = rules();
        let duration = rules
            .iter()
            .find(|r| r.category == "confidentiality duration")
            .unwrap();
        let finding = crate::matcher::evaluate(text, duration);
        assert_eq!(finding.status, ClauseStatus::Weak);
    }
}
