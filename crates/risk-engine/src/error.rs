use thiserror::Error;

/// Failure modes of the analysis pipeline.
///
/// Empty or very short contract text is not an error; it yields a report
/// dominated by absent findings and a maximal score.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Caller supplied a contract type with no registered clause catalog.
    #[error("no clause catalog registered for contract type `{0}`")]
    UnknownContractType(String),

    /// Catalog misconfiguration; should be caught by `catalog::validate()`
    /// at startup rather than per request.
    #[error("clause catalog for contract type `{0}` is empty")]
    EmptyRuleSet(String),

    /// Wiring bug between pipeline components.
    #[error("inconsistent report input: {0}")]
    InconsistentReportInput(String),
}
