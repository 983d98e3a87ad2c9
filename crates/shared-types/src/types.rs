use serde::{Deserialize, Serialize};

/// Contract categories with a registered clause catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Nda,
    ServiceAgreement,
    EmploymentAgreement,
}

impl ContractType {
    /// Get the human-readable contract type name
    pub fn name(&self) -> &'static str {
        match self {
            ContractType::Nda => "Non-Disclosure Agreement",
            ContractType::ServiceAgreement => "Service Agreement",
            ContractType::EmploymentAgreement => "Employment Agreement",
        }
    }

    /// Parse from a UI-facing label (case-insensitive)
    pub fn parse_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "nda"
            | "non-disclosure agreement"
            | "non disclosure agreement"
            | "nondisclosure agreement"
            | "confidentiality agreement" => Some(ContractType::Nda),
            "service agreement" | "services agreement" | "service_agreement"
            | "consulting agreement" => Some(ContractType::ServiceAgreement),
            "employment agreement" | "employment_agreement" | "employment contract" => {
                Some(ContractType::EmploymentAgreement)
            }
            _ => None,
        }
    }

    /// All supported contract types, in catalog registration order
    pub fn all() -> [ContractType; 3] {
        [
            ContractType::Nda,
            ContractType::ServiceAgreement,
            ContractType::EmploymentAgreement,
        ]
    }
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordinal risk level attached to a finding.
///
/// `None` marks an informational finding for a clause that is present and
/// adequate; it never contributes to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl Severity {
    /// Weighted points used by the scorer (critical=4 .. none=0)
    pub fn points(&self) -> u32 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
            Severity::None => 0,
        }
    }

    /// One tier below, floored at `Low` so weak findings stay visible
    pub fn step_down(&self) -> Severity {
        match self {
            Severity::Critical => Severity::High,
            Severity::High => Severity::Medium,
            Severity::Medium | Severity::Low => Severity::Low,
            Severity::None => Severity::None,
        }
    }
}

/// Per-category outcome of checking a document against one catalog rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseStatus {
    Present,
    Weak,
    Absent,
}

/// Byte span in the original document text, for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start_offset: usize,
    pub end_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub category: String,
    /// Risk group label, e.g. "Financial" or "Intellectual Property"
    pub group: String,
    pub status: ClauseStatus,
    pub severity: Severity,
    /// Excerpt taken from the original (un-normalized) text
    pub excerpt: Option<String>,
    pub span: Option<TextSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub severity: Severity,
    pub suggestion: String,
}

/// Coarse banding of the normalized overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Band a 0-100 overall score (>=70 high, >=40 medium)
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            RiskLevel::High
        } else if score >= 40.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Statistical profile of the analyzed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractStatistics {
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize,
    pub section_count: usize,
    pub estimated_pages: usize,
    pub reading_time_minutes: usize,
    pub complexity_score: u8,
}

/// Complete structured output of one analysis run.
///
/// Findings and recommendations are ordered severity-descending; ties keep
/// the catalog declaration order. The structure is flat so it can be rendered
/// or exported directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub contract_type: ContractType,
    /// Normalized 0-100; higher means riskier
    pub overall_score: f64,
    pub risk_level: RiskLevel,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<Recommendation>,
    pub statistics: ContractStatistics,
    pub analyzed_at: u64,
}
