//! Named tracked variables that constructors act upon.

use serde::Deserialize;

use crate::constructor::Constructor;
use crate::error::ConstructorError;

/// Named variable values, e.g. `health = 10`, `positivity = 5`.
///
/// Names and values always have the same length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<NamedValue>")]
pub struct TrackedVariables {
    names: Vec<String>,
    values: Vec<f64>,
}

/// One `name: value` entry in configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedValue {
    /// Variable name.
    pub name: String,
    /// Initial value.
    pub value: f64,
}

impl TryFrom<Vec<NamedValue>> for TrackedVariables {
    type Error = ConstructorError;

    fn try_from(entries: Vec<NamedValue>) -> Result<Self, Self::Error> {
        let (names, values): (Vec<String>, Vec<f64>) =
            entries.into_iter().map(|e| (e.name, e.value)).unzip();
        Self::new(names, values)
    }
}

impl Default for TrackedVariables {
    fn default() -> Self {
        Self {
            names: vec![String::from("health"), String::from("positivity")],
            values: vec![10.0, 5.0],
        }
    }
}

impl TrackedVariables {
    /// Pair variable names with their values.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorError::DimensionMismatch`] if the two vectors
    /// differ in length.
    pub fn new(names: Vec<String>, values: Vec<f64>) -> Result<Self, ConstructorError> {
        if names.len() != values.len() {
            return Err(ConstructorError::DimensionMismatch {
                expected: names.len(),
                actual: values.len(),
            });
        }
        Ok(Self { names, values })
    }

    /// Number of tracked variables.
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variables are tracked.
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Variable names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Current values in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up a value by variable name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.values.get(i).copied())
    }

    /// The variable state after activating `constructor` once.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorError::DimensionMismatch`] if the constructor
    /// affects a different number of variables.
    pub fn apply(&self, constructor: &Constructor) -> Result<Self, ConstructorError> {
        Ok(Self {
            names: self.names.clone(),
            values: constructor.apply_effect(&self.values)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_tracks_health_and_positivity() {
        let vars = TrackedVariables::default();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("health"), Some(10.0));
        assert_eq!(vars.get("positivity"), Some(5.0));
        assert_eq!(vars.get("wealth"), None);
    }

    #[test]
    fn mismatched_names_rejected() {
        let err = TrackedVariables::new(vec![String::from("a")], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ConstructorError::DimensionMismatch { .. }));
    }

    #[test]
    fn apply_returns_new_state() {
        let vars = TrackedVariables::default();
        let c = Constructor::new(1.0, 1.0, vec![-3.0, 1.0]).unwrap();
        let next = vars.apply(&c).unwrap();
        assert_eq!(next.values(), &[7.0, 6.0]);
        assert_eq!(vars.values(), &[10.0, 5.0]);
    }

    #[test]
    fn apply_with_wrong_dimension_fails() {
        let vars = TrackedVariables::default();
        let c = Constructor::new(1.0, 1.0, vec![-3.0]).unwrap();
        assert!(vars.apply(&c).is_err());
    }

    #[test]
    fn deserializes_from_list() {
        let vars: TrackedVariables =
            serde_yml::from_str("- name: health\n  value: 8.0\n").unwrap();
        assert_eq!(vars.names(), &[String::from("health")]);
    }
}
