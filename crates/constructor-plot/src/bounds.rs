//! Axis ranges and bound resolution.
//!
//! An explicit range replaces the data extent on its axis, both for the
//! displayed axis and for placing the annotation regions. The two axes are
//! resolved independently.

use serde::Deserialize;

use crate::error::PlotError;

/// A closed interval `[min, max]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "[f64; 2]")]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl TryFrom<[f64; 2]> for AxisRange {
    type Error = PlotError;

    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl AxisRange {
    /// Create a range. `min == max` is allowed and yields a degenerate
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidRange`] if either bound is not finite or
    /// `min > max`.
    pub const fn new(min: f64, max: f64) -> Result<Self, PlotError> {
        if min.is_finite() && max.is_finite() && min <= max {
            Ok(Self { min, max })
        } else {
            Err(PlotError::InvalidRange { min, max })
        }
    }

    /// Smallest and largest of `values`, or `None` when there are none.
    pub fn extent(values: &[f64]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        Self::new(min, max).ok()
    }

    /// Lower bound.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether the range has zero width.
    pub const fn is_degenerate(&self) -> bool {
        self.max - self.min <= 0.0
    }
}

/// Resolved bounds on both axes: x is time, y is energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    /// Time-cost axis.
    pub x: AxisRange,
    /// Energy-cost axis.
    pub y: AxisRange,
}

impl PlotBounds {
    /// The `(x, y)` corner with both lower bounds.
    pub const fn min_point(&self) -> (f64, f64) {
        (self.x.min, self.y.min)
    }

    /// The `(x, y)` corner with both upper bounds.
    pub const fn max_point(&self) -> (f64, f64) {
        (self.x.max, self.y.max)
    }
}

/// Resolve the axis bounds for a set of points.
///
/// Each axis uses its explicit range when one is given, otherwise the
/// extent of the data on that axis.
///
/// # Errors
///
/// Returns [`PlotError::EmptyPopulation`] if an axis has no explicit range
/// and no data, and [`PlotError::InvalidRange`] if the data contains
/// non-finite values.
pub fn resolve_bounds(
    times: &[f64],
    energies: &[f64],
    x_range: Option<AxisRange>,
    y_range: Option<AxisRange>,
) -> Result<PlotBounds, PlotError> {
    Ok(PlotBounds {
        x: resolve_axis(times, x_range)?,
        y: resolve_axis(energies, y_range)?,
    })
}

fn resolve_axis(values: &[f64], explicit: Option<AxisRange>) -> Result<AxisRange, PlotError> {
    if let Some(range) = explicit {
        return Ok(range);
    }
    if values.is_empty() {
        return Err(PlotError::EmptyPopulation);
    }
    AxisRange::extent(values).ok_or(PlotError::InvalidRange {
        min: f64::NAN,
        max: f64::NAN,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-12 && (a.1 - b.1).abs() < 1e-12
    }

    #[test]
    fn inverted_range_rejected() {
        assert!(matches!(
            AxisRange::new(5.0, 0.0),
            Err(PlotError::InvalidRange { .. })
        ));
    }

    #[test]
    fn infinite_range_rejected() {
        assert!(AxisRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn extent_of_empty_is_none() {
        assert!(AxisRange::extent(&[]).is_none());
    }

    #[test]
    fn data_extent_used_without_ranges() {
        let bounds = resolve_bounds(&[1.0, 3.0, 2.0], &[0.5, 4.0, 2.5], None, None).unwrap();
        assert!(close(bounds.min_point(), (1.0, 0.5)));
        assert!(close(bounds.max_point(), (3.0, 4.0)));
    }

    #[test]
    fn explicit_ranges_override_data() {
        let r = AxisRange::new(0.0, 5.0).unwrap();
        let bounds = resolve_bounds(&[1.0, 9.0], &[0.3, 0.7], Some(r), Some(r)).unwrap();
        assert!(close(bounds.max_point(), (5.0, 5.0)));
        assert!(close(bounds.min_point(), (0.0, 0.0)));
    }

    #[test]
    fn axes_resolve_independently() {
        let x = AxisRange::new(0.0, 10.0).unwrap();
        let bounds = resolve_bounds(&[2.0, 3.0], &[1.0, 6.0], Some(x), None).unwrap();
        assert!(close(bounds.min_point(), (0.0, 1.0)));
        assert!(close(bounds.max_point(), (10.0, 6.0)));
    }

    #[test]
    fn empty_data_without_range_fails() {
        assert!(matches!(
            resolve_bounds(&[], &[], None, None),
            Err(PlotError::EmptyPopulation)
        ));
    }

    #[test]
    fn single_point_is_degenerate() {
        let bounds = resolve_bounds(&[2.0], &[3.0], None, None).unwrap();
        assert!(bounds.x.is_degenerate());
        assert!(bounds.y.is_degenerate());
    }

    #[test]
    fn range_deserializes_from_pair() {
        let r: AxisRange = serde_yml::from_str("[0.0, 5.0]").unwrap();
        assert!((r.max() - 5.0).abs() < 1e-12);
        let bad: Result<AxisRange, _> = serde_yml::from_str("[5.0, 0.0]");
        assert!(bad.is_err());
    }
}
