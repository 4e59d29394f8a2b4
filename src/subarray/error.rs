use thiserror::Error;

/// Errors raised by the zero-sum subarray finder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubarrayError {
    /// The caller asked for more elements than the sequence holds,
    /// or supplied a negative element count.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SubarrayError {
    pub fn count_exceeds_length(requested: usize, available: usize) -> Self {
        SubarrayError::InvalidArgument(format!(
            "count {} exceeds sequence length {}",
            requested, available
        ))
    }

    pub fn negative_count(requested: i64) -> Self {
        SubarrayError::InvalidArgument(format!("count must not be negative, got {}", requested))
    }
}
