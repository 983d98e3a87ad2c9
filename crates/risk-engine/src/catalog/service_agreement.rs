//! Clause catalog for service agreements
//!
//! Ordered the way a services contract is normally read: what is being done,
//! what it costs, who carries the risk, and the boilerplate at the end.

use super::{confidentiality, governing_law, rule, severability, ClauseRule};
use shared_types::Severity;

pub fn rules() -> Vec<ClauseRule> {
    vec![
        rule(
            "scope of services",
            "Operational",
            Severity::Critical,
            &[
                r"scope of (?:services|work)",
                r"statement of work",
                r"services to be (?:provided|performed)",
                r"deliverables",
            ],
            &[],
            &[],
            "Describe the services and deliverables in a defined scope of work",
            "Expand the scope reference into a concrete description of services and deliverables",
        ),
        rule(
            "payment terms",
            "Financial",
            Severity::Critical,
            &[r"\$\s?[\d,]+", r"payment", r"compensation", r"fees?\b"],
            &[],
            &[
                r"(?:payment|fee|invoice)s?.{0,80}(?:schedule|due|within \d+|net \d+)",
                r"net\s*\d+",
                r"due (?:upon|within|on)",
                r"payable (?:upon|within|on|monthly|quarterly)",
            ],
            "Specify clear payment amounts, schedules, and procedures",
            "Tie payment amounts to an explicit schedule: due dates, invoicing cadence, and accepted methods",
        ),
        rule(
            "limitation of liability",
            "Liability",
            Severity::Critical,
            &[
                r"limitation of liability",
                r"liabilit\w*.{0,80}limit",
                r"limit\w*.{0,80}liabilit",
                r"cap.{0,60}damages",
                r"aggregate liability",
            ],
            &[],
            &[],
            "Add clear liability limitation clauses to cap financial exposure",
            "State an explicit liability cap and the damages it excludes rather than a bare mention",
        ),
        rule(
            "termination",
            "Termination",
            Severity::High,
            &[
                r"terminat",
                r"end (?:of )?(?:this |the )?agreement",
                r"expir",
                r"cancel",
            ],
            &[],
            &[
                r"\d+\s*(?:business\s*)?days?.{0,50}notice",
                r"notice.{0,50}\d+\s*(?:business\s*)?days?",
                r"written notice",
            ],
            "Include clear termination procedures and notice requirements",
            "State the notice period and procedure required to terminate the agreement",
        ),
        rule(
            "intellectual property",
            "Intellectual Property",
            Severity::High,
            &[
                r"intellectual property",
                r"copyright",
                r"trademark",
                r"patent",
                r"work product",
            ],
            &[],
            &[],
            "Clarify ownership and rights to intellectual property created",
            "State which party owns work product and what license, if any, the other retains",
        ),
        confidentiality(),
        rule(
            "indemnification",
            "Liability",
            Severity::Medium,
            &[r"indemnif", r"hold harmless", r"defend and hold"],
            &[],
            &[],
            "Add indemnification obligations for third-party claims",
            "Define who indemnifies whom, for which claims, and any caps on the obligation",
        ),
        rule(
            "warranties",
            "Legal",
            Severity::Medium,
            &[
                r"warrant",
                r"represents? and warrants?",
                r"disclaim",
            ],
            &[],
            &[],
            "Add service warranties and any disclaimers of implied warranties",
            "Expand the warranty language to state the performance standard being promised",
        ),
        governing_law(),
        rule(
            "late payment penalties",
            "Financial",
            Severity::Low,
            &[
                r"late fees?",
                r"late charge",
                r"interest.{0,60}overdue",
                r"penalt\w*.{0,50}late",
            ],
            &[],
            &[],
            "Consider adding late payment fees and interest charges",
            "State the late fee rate and when it starts accruing",
        ),
        rule(
            "force majeure",
            "Operational",
            Severity::Low,
            &[
                r"force majeure",
                r"acts? of god",
                r"unforeseeable",
                r"beyond.{0,50}control",
            ],
            &[],
            &[],
            "Consider adding force majeure clauses for unforeseen circumstances",
            "List the qualifying events and the parties' duties while performance is excused",
        ),
        rule(
            "amendment",
            "Legal",
            Severity::Low,
            &[
                r"amend",
                r"modif",
                r"chang\w*.{0,50}agreement",
                r"written consent",
            ],
            &[],
            &[],
            "Specify how the agreement can be amended or modified",
            "Require amendments to be in writing and signed by both parties",
        ),
        severability(),
    ]
}
