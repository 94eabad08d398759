//! The [`Constructor`] record and its effect arithmetic.
//!
//! A constructor is created once (literally or by the population
//! generator) and is read-only afterwards, except through
//! [`Constructor::change_effect`], which strengthens or weakens it.

use std::fmt;

use serde::Deserialize;

use crate::error::ConstructorError;

/// An agent with a cost profile and a per-variable effect vector.
///
/// `energy` and `time` are the costs of changing this constructor's
/// strength. `effect_vector` holds one signed delta per tracked variable.
/// Keeping the effect vector the same length as the tracked variables is
/// the caller's responsibility; mismatches surface as
/// [`ConstructorError::DimensionMismatch`] when the vectors are combined.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawConstructor")]
pub struct Constructor {
    energy: f64,
    time: f64,
    name: String,
    effect_vector: Vec<f64>,
}

/// Unvalidated wire form, checked on the way into [`Constructor`].
#[derive(Deserialize)]
struct RawConstructor {
    energy: f64,
    time: f64,
    #[serde(default)]
    name: String,
    effect_vector: Vec<f64>,
}

impl TryFrom<RawConstructor> for Constructor {
    type Error = ConstructorError;

    fn try_from(raw: RawConstructor) -> Result<Self, Self::Error> {
        Self::named(raw.name, raw.energy, raw.time, raw.effect_vector)
    }
}

impl Constructor {
    /// Create an unnamed constructor.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorError::InvalidCost`] if `energy` or `time` is
    /// negative, NaN, or infinite, and [`ConstructorError::InvalidEffect`]
    /// if an effect entry is NaN or infinite.
    pub fn new(energy: f64, time: f64, effect_vector: Vec<f64>) -> Result<Self, ConstructorError> {
        Self::named(String::new(), energy, time, effect_vector)
    }

    /// Create a constructor with a display label.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorError::InvalidCost`] if `energy` or `time` is
    /// negative, NaN, or infinite, and [`ConstructorError::InvalidEffect`]
    /// if an effect entry is NaN or infinite.
    pub fn named(
        name: impl Into<String>,
        energy: f64,
        time: f64,
        effect_vector: Vec<f64>,
    ) -> Result<Self, ConstructorError> {
        validate_cost("energy", energy)?;
        validate_cost("time", time)?;
        validate_effects(&effect_vector)?;
        Ok(Self {
            energy,
            time,
            name: name.into(),
            effect_vector,
        })
    }

    /// Energy cost to change this constructor's strength.
    pub const fn energy(&self) -> f64 {
        self.energy
    }

    /// Time cost to change this constructor's strength.
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Display label; empty for generated constructors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tracked variables this constructor affects.
    pub const fn dimension(&self) -> usize {
        self.effect_vector.len()
    }

    /// The effect on the first tracked variable, if there is one.
    pub fn primary_effect(&self) -> Option<f64> {
        self.effect_vector.first().copied()
    }

    /// Activate the constructor: return its current effect vector.
    pub fn invoke(&self) -> &[f64] {
        &self.effect_vector
    }

    /// Return `variables` with this constructor's effect added elementwise.
    ///
    /// Neither `variables` nor the effect vector is modified.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorError::DimensionMismatch`] if `variables` does
    /// not have exactly one entry per effect.
    pub fn apply_effect(&self, variables: &[f64]) -> Result<Vec<f64>, ConstructorError> {
        self.check_dimension(variables.len())?;
        Ok(variables
            .iter()
            .zip(&self.effect_vector)
            .map(|(value, delta)| value + delta)
            .collect())
    }

    /// Strengthen or weaken the constructor by adding `deltas` to its
    /// effect vector.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorError::DimensionMismatch`] if `deltas` does not
    /// have exactly one entry per effect. The effect vector is left
    /// untouched in that case.
    pub fn change_effect(&mut self, deltas: &[f64]) -> Result<(), ConstructorError> {
        self.check_dimension(deltas.len())?;
        for (effect, delta) in self.effect_vector.iter_mut().zip(deltas) {
            *effect += delta;
        }
        Ok(())
    }

    /// Multi-line human-readable rendering of costs and effects.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    const fn check_dimension(&self, actual: usize) -> Result<(), ConstructorError> {
        let expected = self.effect_vector.len();
        if expected == actual {
            Ok(())
        } else {
            Err(ConstructorError::DimensionMismatch { expected, actual })
        }
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Energy: {}", self.energy)?;
        writeln!(f, "Time: {}", self.time)?;
        write!(f, "Output: {:?}", self.effect_vector)
    }
}

fn validate_effects(effects: &[f64]) -> Result<(), ConstructorError> {
    effects
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
        .map_or(Ok(()), |(index, value)| {
            Err(ConstructorError::InvalidEffect {
                index,
                value: *value,
            })
        })
}

const fn validate_cost(cost: &'static str, value: f64) -> Result<(), ConstructorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConstructorError::InvalidCost { cost, value })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
