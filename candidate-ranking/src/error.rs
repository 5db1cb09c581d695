use thiserror::Error;

/// Failure modes of the ranking pipeline. All are detected synchronously and
/// the computation is deterministic, so retrying with identical input yields
/// the identical failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// A criterion has no spread across the candidate set: either every
    /// candidate reports 0 (normalization would divide by zero), or the
    /// column is constant and both reference profiles collapse onto it.
    #[error("criterion {criterion:?} has no spread across the candidate set")]
    DegenerateColumn { criterion: &'static str },
    /// A criterion weight is negative, NaN, or infinite.
    #[error("invalid weight {value} for criterion {criterion:?}")]
    InvalidWeight {
        criterion: &'static str,
        value: f64,
    },
}
