//! Random population generation.
//!
//! Energy and time costs are log-normal, effect magnitudes are Gaussian.
//! The random source is always passed in by the caller.

use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use crate::constructor::Constructor;
use crate::distribution::{Gaussian, LogNormal};
use crate::error::ConstructorError;

/// Distributions used by [`generate_population`].
///
/// Defaults: energy and time `exp(N(1, 0.5))`, effects `N(0, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PopulationParams {
    /// Distribution of energy costs.
    #[serde(default = "default_cost")]
    pub energy: LogNormal,

    /// Distribution of time costs.
    #[serde(default = "default_cost")]
    pub time: LogNormal,

    /// Distribution of each effect-vector entry.
    #[serde(default = "default_effect")]
    pub effect: Gaussian,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            energy: default_cost(),
            time: default_cost(),
            effect: default_effect(),
        }
    }
}

const fn default_cost() -> LogNormal {
    LogNormal::from_valid(1.0, 0.5)
}

const fn default_effect() -> Gaussian {
    Gaussian::from_valid(0.0, 2.0)
}

/// Generate `count` unnamed constructors, each affecting `variable_count`
/// variables.
///
/// Draw order is fixed: every energy, then every time, then the effect
/// vectors one constructor at a time. The same seed therefore always
/// yields the same population.
///
/// # Errors
///
/// Returns [`ConstructorError::InvalidCost`] if a sampled cost overflows
/// to infinity (only possible with extreme distribution parameters).
pub fn generate_population<R: Rng>(
    count: usize,
    variable_count: usize,
    params: &PopulationParams,
    rng: &mut R,
) -> Result<Vec<Constructor>, ConstructorError> {
    let energies = params.energy.sample_n(rng, count);
    let times = params.time.sample_n(rng, count);

    let population = energies
        .into_iter()
        .zip(times)
        .map(|(energy, time)| {
            let effects = params.effect.sample_n(rng, variable_count);
            Constructor::new(energy, time, effects)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        count = population.len(),
        variable_count = variable_count,
        "population generated"
    );
    Ok(population)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
