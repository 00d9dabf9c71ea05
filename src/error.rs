// Errors for the validating decimation entry point

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimateError {
    #[error("decimation target must be > 0")]
    ZeroTarget,
    #[error("snapshot {index} is earlier than its predecessor; input must be sorted by timestamp")]
    Unsorted { index: usize },
}
