//! Error types for the constructor-core crate.
//!
//! Effect arithmetic never truncates: every operation that combines two
//! vectors checks their lengths first and reports a mismatch as a typed
//! error.

/// Errors that can occur while building or combining constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructorError {
    /// Two vectors that are combined elementwise have different lengths.
    #[error("dimension mismatch: expected {expected} values but got {actual}")]
    DimensionMismatch {
        /// Length of the constructor's effect vector.
        expected: usize,
        /// Length of the vector supplied by the caller.
        actual: usize,
    },

    /// An energy or time cost is negative or not finite.
    #[error("invalid {cost} cost: {value}")]
    InvalidCost {
        /// Which cost was rejected (`energy` or `time`).
        cost: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An effect-vector entry is NaN or infinite.
    #[error("invalid effect at index {index}: {value}")]
    InvalidEffect {
        /// Position of the rejected entry.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A distribution parameter is outside its valid domain.
    #[error("invalid distribution parameter {parameter}: {value}")]
    InvalidDistribution {
        /// Name of the rejected parameter (`mean` or `sd`).
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
}
