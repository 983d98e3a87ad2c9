pub mod types;

pub use types::{
    ClauseStatus, ContractStatistics, ContractType, Finding, Recommendation, RiskLevel,
    RiskReport, Severity, TextSpan,
};
