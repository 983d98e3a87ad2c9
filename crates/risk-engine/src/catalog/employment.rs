//! Clause catalog for employment agreements
//!
//! Checklist order follows a standard offer-to-boilerplate reading: the job,
//! the money, the exit, then protective covenants.

use super::{confidentiality, governing_law, rule, severability, ClauseRule};
use shared_types::Severity;

pub fn rules() -> Vec<ClauseRule> {
    vec![
        rule(
            "compensation",
            "Financial",
            Severity::Critical,
            &[r"salary", r"\$\s?[\d,]+", r"compensation", r"wages?\b"],
            &[],
            &[
                r"per (?:annum|year|month|hour|pay period)",
                r"annual(?:ized)?",
                r"hourly",
                r"payable",
            ],
            "State the salary or wage, the pay period, and how compensation is reviewed",
            "Anchor the compensation figure to a pay period such as per annum or per hour",
        ),
        rule(
            "position and duties",
            "Operational",
            Severity::High,
            &[
                r"position",
                r"duties",
                r"responsibilit",
                r"job title",
                r"reports? to",
            ],
            &[],
            &[],
            "Describe the position, its duties, and the reporting line",
            "Expand the role reference into a description of duties and reporting structure",
        ),
        rule(
            "termination",
            "Termination",
            Severity::High,
            &[r"terminat", r"resign", r"dismissal", r"cancel"],
            &["at-will", "at will"],
            &[
                r"\d+\s*(?:business\s*)?days?.{0,50}notice",
                r"notice.{0,50}\d+\s*(?:business\s*)?(?:days?|weeks?)",
                r"written notice",
                r"at.?will",
            ],
            "Include clear termination procedures and notice requirements",
            "State whether employment is at-will or what notice period applies on termination",
        ),
        rule(
            "benefits",
            "Financial",
            Severity::Medium,
            &[
                r"benefits",
                r"health insurance",
                r"vacation",
                r"paid time off",
                r"retirement",
                r"401\(?k\)?",
            ],
            &[],
            &[],
            "List the benefits the employee is entitled to, including leave and insurance",
            "Turn the benefits mention into a concrete list of entitlements and eligibility dates",
        ),
        confidentiality(),
        rule(
            "invention assignment",
            "Intellectual Property",
            Severity::High,
            &[
                r"work (?:made )?for hire",
                r"assign.{0,60}(?:invention|work product|intellectual property)",
                r"intellectual property",
            ],
            &[],
            &[],
            "Clarify ownership and rights to intellectual property created",
            "Add an express assignment of inventions and work product made during employment",
        ),
        // Unbounded covenants are routinely struck down, so a bare
        // non-compete mention without duration or geography reads as weak.
        rule(
            "restrictive covenants",
            "Legal",
            Severity::Medium,
            &[r"non.?compete", r"non.?solicit", r"restrictive covenant"],
            &[],
            &[
                r"\d+\s*(?:year|month)s?",
                r"geographic",
                r"within.{0,50}(?:miles|radius|county|state)",
            ],
            "Consider restrictive covenants bounded by duration and geography",
            "Bound restrictive covenants with an explicit duration and geographic scope so they remain enforceable",
        ),
        governing_law(),
        rule(
            "dispute resolution",
            "Legal",
            Severity::Low,
            &[r"arbitrat", r"mediat", r"dispute resolution"],
            &[],
            &[],
            "Specify how employment disputes are resolved, such as arbitration or mediation",
            "Describe the dispute process end to end: forum, rules, and who bears the costs",
        ),
        severability(),
    ]
}
