//! Error types for the demonstration binary.
//!
//! [`DemoError`] wraps every failure mode of loading configuration and
//! drawing the scenarios, giving `main` a single type to propagate.

use constructor_core::ConstructorError;
use constructor_plot::PlotError;

use crate::config::ConfigError;

/// Top-level error for the demonstration binary.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Building constructors failed.
    #[error("constructor error: {source}")]
    Constructor {
        /// The underlying constructor error.
        #[from]
        source: ConstructorError,
    },

    /// Building or drawing a figure failed.
    #[error("plot error: {source}")]
    Plot {
        /// The underlying plot error.
        #[from]
        source: PlotError,
    },

    /// Preparing the output directory failed.
    #[error("output directory error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
