//! Assembles the final risk report

use crate::error::AnalysisError;
use shared_types::{
    ContractStatistics, ContractType, Finding, Recommendation, RiskLevel, RiskReport,
};

/// Pure aggregation of the pipeline outputs into one report.
///
/// Findings arrive in catalog declaration order and leave sorted
/// severity-descending; the stable sort keeps declaration order within each
/// tier. Fails fast if a recommendation references a category no finding
/// covers, rather than silently dropping it.
pub fn assemble(
    contract_type: ContractType,
    mut findings: Vec<Finding>,
    overall_score: f64,
    recommendations: Vec<Recommendation>,
    statistics: ContractStatistics,
) -> Result<RiskReport, AnalysisError> {
    for recommendation in &recommendations {
        if !findings
            .iter()
            .any(|f| f.category == recommendation.category)
        {
            return Err(AnalysisError::InconsistentReportInput(format!(
                "recommendation references category `{}` with no matching finding",
                recommendation.category
            )));
        }
    }

    findings.sort_by(|a, b| b.severity.points().cmp(&a.severity.points()));

    Ok(RiskReport {
        contract_type,
        overall_score,
        risk_level: RiskLevel::from_score(overall_score),
        findings,
        recommendations,
        statistics,
        analyzed_at: chrono::Utc::now().timestamp() as u64,
    })
}
