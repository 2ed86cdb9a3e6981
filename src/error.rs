use thiserror::Error;

/// Errors reported for caller-supplied algorithm names and index ranges.
///
/// The algorithms themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name does not match any [`Algorithm`](crate::Algorithm).
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    /// `high` does not index into a slice of length `len`.
    #[error("range {low}..={high} is out of bounds for length {len}")]
    RangeOutOfBounds { low: usize, high: usize, len: usize },
    /// `low > high`, so there is no element to pivot on.
    #[error("range {low}..={high} is empty")]
    EmptyRange { low: usize, high: usize },
}
