//! Constructors, effect vectors, and random population generation.
//!
//! A constructor carries a cost profile (energy and time needed to change
//! its strength) and an effect vector: one signed delta per tracked
//! variable, applied when the constructor is activated. This crate holds
//! the data model and the sampling logic only; figures are built by
//! `constructor-plot`.
//!
//! # Modules
//!
//! - [`catalog`] -- Hand-authored constructor sets ([`smoking_constructors`])
//! - [`constructor`] -- The [`Constructor`] record and effect arithmetic
//! - [`distribution`] -- Seedable [`Gaussian`] and [`LogNormal`] samplers
//! - [`error`] -- Error types for all constructor operations ([`ConstructorError`])
//! - [`population`] -- Random population generation ([`generate_population`])
//! - [`variables`] -- Named tracked variables ([`TrackedVariables`])

pub mod catalog;
pub mod constructor;
pub mod distribution;
pub mod error;
pub mod population;
pub mod variables;

// Re-export primary types at crate root for convenience.
pub use catalog::smoking_constructors;
pub use constructor::Constructor;
pub use distribution::{Gaussian, LogNormal};
pub use error::ConstructorError;
pub use population::{PopulationParams, generate_population};
pub use variables::TrackedVariables;
