//! Seedable samplers for the population generator.
//!
//! Both samplers draw from an injected [`rand::Rng`], never from a global
//! source, so a seeded generator reproduces a population exactly.
//! Gaussian draws use the Box-Muller transform over two uniform draws.

use std::f64::consts::TAU;

use rand::Rng;
use serde::Deserialize;

use crate::error::ConstructorError;

/// Normal distribution `N(mean, sd)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawParams")]
pub struct Gaussian {
    mean: f64,
    sd: f64,
}

/// Log-normal distribution: `exp(N(mean, sd))`.
///
/// `mean` and `sd` parametrize the underlying normal, not the log-normal
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawParams")]
pub struct LogNormal {
    normal: Gaussian,
}

#[derive(Deserialize)]
struct RawParams {
    mean: f64,
    sd: f64,
}

impl TryFrom<RawParams> for Gaussian {
    type Error = ConstructorError;

    fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
        Self::new(raw.mean, raw.sd)
    }
}

impl TryFrom<RawParams> for LogNormal {
    type Error = ConstructorError;

    fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
        Self::new(raw.mean, raw.sd)
    }
}

impl Gaussian {
    /// Create a normal distribution.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorError::InvalidDistribution`] if `mean` is not
    /// finite or `sd` is negative or not finite.
    pub const fn new(mean: f64, sd: f64) -> Result<Self, ConstructorError> {
        if !mean.is_finite() {
            return Err(ConstructorError::InvalidDistribution {
                parameter: "mean",
                value: mean,
            });
        }
        if !sd.is_finite() || sd < 0.0 {
            return Err(ConstructorError::InvalidDistribution {
                parameter: "sd",
                value: sd,
            });
        }
        Ok(Self { mean, sd })
    }

    /// Build from parameters already known to be valid.
    pub(crate) const fn from_valid(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    /// Mean of the distribution.
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the distribution.
    pub const fn sd(&self) -> f64 {
        self.sd
    }

    /// Draw one value.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.sd.mul_add(standard_normal(rng), self.mean)
    }

    /// Draw `count` independent values.
    pub fn sample_n<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

impl LogNormal {
    /// Create a log-normal distribution from the underlying normal's
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorError::InvalidDistribution`] under the same
    /// conditions as [`Gaussian::new`].
    pub fn new(mean: f64, sd: f64) -> Result<Self, ConstructorError> {
        Ok(Self {
            normal: Gaussian::new(mean, sd)?,
        })
    }

    /// Build from parameters already known to be valid.
    pub(crate) const fn from_valid(mean: f64, sd: f64) -> Self {
        Self {
            normal: Gaussian::from_valid(mean, sd),
        }
    }

    /// Mean of the underlying normal.
    pub const fn mean(&self) -> f64 {
        self.normal.mean
    }

    /// Standard deviation of the underlying normal.
    pub const fn sd(&self) -> f64 {
        self.normal.sd
    }

    /// Draw one value. Always positive.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng).exp()
    }

    /// Draw `count` independent values.
    pub fn sample_n<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// One draw from `N(0, 1)`.
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // `random` yields [0, 1); flip it so `ln` never sees zero.
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
