//! Error types for the constructor-plot crate.

/// Errors that can occur while building or drawing a figure.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// No constructors were supplied, so no axis extent exists.
    #[error("cannot plot an empty constructor population")]
    EmptyPopulation,

    /// A constructor has an empty effect vector, so it has no colour.
    #[error("constructor at index {index} has no effect to encode")]
    MissingEffect {
        /// Position of the offending constructor in the input.
        index: usize,
    },

    /// An axis range is inverted, empty, or not finite.
    #[error("invalid axis range [{min}, {max}]")]
    InvalidRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// An annotation region size is negative or not finite.
    #[error("invalid {region} region size: {size}")]
    InvalidRegion {
        /// Which region was rejected.
        region: &'static str,
        /// The rejected size.
        size: f64,
    },

    /// The drawing backend reported a failure.
    #[error("drawing backend error: {message}")]
    Backend {
        /// Description of the backend failure.
        message: String,
    },
}
