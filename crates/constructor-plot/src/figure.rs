//! The figure model.
//!
//! [`build_figure`] turns constructors and [`PlotOptions`] into a
//! [`Figure`]: everything the renderer draws, with all visual encodings
//! already decided. Nothing here touches a drawing backend.

use constructor_core::Constructor;
use tracing::debug;

use crate::bounds::{PlotBounds, resolve_bounds};
use crate::encoding::{Marker, PointColor, encode_effect};
use crate::error::PlotError;
use crate::options::PlotOptions;

/// Horizontal axis label.
pub const X_LABEL: &str = "Time cost to change";

/// Vertical axis label.
pub const Y_LABEL: &str = "Energy cost to change";

/// One constructor as a scatter point.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    /// Time cost (x).
    pub time: f64,
    /// Energy cost (y).
    pub energy: f64,
    /// Colour and size from the first effect entry.
    pub marker: Marker,
    /// Text drawn at the point; empty for unnamed constructors.
    pub label: String,
}

/// The two annotated areas of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Maximal-cost corner.
    Counterfactual,
    /// Minimal-cost corner.
    EasyChange,
}

impl RegionKind {
    /// Legend text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Counterfactual => "Counterfactuals",
            Self::EasyChange => "Easy change",
        }
    }
}

/// A circular annotation in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationRegion {
    /// Which region this is.
    pub kind: RegionKind,
    /// Centre as `(time, energy)`.
    pub center: (f64, f64),
    /// Radius in data units.
    pub radius: f64,
}

/// What a legend entry's swatch shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    /// A point colour.
    Point(PointColor),
    /// An annotation region's fill.
    Region(RegionKind),
}

/// One legend line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Legend text.
    pub label: &'static str,
    /// Swatch drawn next to the text.
    pub swatch: Swatch,
}

/// Everything needed to draw one cost scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Caption.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: &'static str,
    /// Vertical axis label.
    pub y_label: &'static str,
    /// Resolved axis bounds.
    pub bounds: PlotBounds,
    /// One point per constructor, in input order.
    pub points: Vec<PlottedPoint>,
    /// Region at the maximal corner of `bounds`.
    pub counterfactual: AnnotationRegion,
    /// Region at the minimal corner of `bounds`.
    pub easy_change: AnnotationRegion,
    /// Colour key followed by the two regions.
    pub legend: Vec<LegendEntry>,
}

impl Figure {
    /// Number of points drawn in `color`.
    pub fn count_color(&self, color: PointColor) -> usize {
        self.points
            .iter()
            .filter(|p| p.marker.color == color)
            .count()
    }

    /// Both annotation regions, counterfactual first.
    pub const fn regions(&self) -> [&AnnotationRegion; 2] {
        [&self.counterfactual, &self.easy_change]
    }
}

/// The five legend entries every figure carries.
pub fn legend_entries() -> Vec<LegendEntry> {
    vec![
        LegendEntry {
            label: "Positive effect",
            swatch: Swatch::Point(PointColor::Green),
        },
        LegendEntry {
            label: "Negative effect",
            swatch: Swatch::Point(PointColor::Red),
        },
        LegendEntry {
            label: "No effect",
            swatch: Swatch::Point(PointColor::Black),
        },
        LegendEntry {
            label: RegionKind::Counterfactual.label(),
            swatch: Swatch::Region(RegionKind::Counterfactual),
        },
        LegendEntry {
            label: RegionKind::EasyChange.label(),
            swatch: Swatch::Region(RegionKind::EasyChange),
        },
    ]
}

/// Build the figure for `constructors`.
///
/// Only the first effect entry of each constructor is encoded. Region
/// centres come from the resolved bounds, so with explicit ranges they sit
/// on the range corners rather than on the data extrema.
///
/// # Errors
///
/// - [`PlotError::EmptyPopulation`] if `constructors` is empty.
/// - [`PlotError::MissingEffect`] if a constructor has an empty effect
///   vector.
/// - [`PlotError::InvalidRegion`] if a region size is negative or not
///   finite.
pub fn build_figure(
    constructors: &[Constructor],
    options: &PlotOptions,
) -> Result<Figure, PlotError> {
    if constructors.is_empty() {
        return Err(PlotError::EmptyPopulation);
    }
    let counterfactual_radius =
        validate_region("counterfactual", options.counterfactual_diameter)?;
    let easy_change_radius = validate_region("easy change", options.easy_change_diameter)?;

    let points = constructors
        .iter()
        .enumerate()
        .map(|(index, c)| -> Result<PlottedPoint, PlotError> {
            let effect = c
                .primary_effect()
                .ok_or(PlotError::MissingEffect { index })?;
            Ok(PlottedPoint {
                time: c.time(),
                energy: c.energy(),
                marker: encode_effect(effect),
                label: c.name().to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let times: Vec<f64> = points.iter().map(|p| p.time).collect();
    let energies: Vec<f64> = points.iter().map(|p| p.energy).collect();
    let bounds = resolve_bounds(&times, &energies, options.x_range, options.y_range)?;

    let figure = Figure {
        title: options.resolved_title().to_owned(),
        x_label: X_LABEL,
        y_label: Y_LABEL,
        bounds,
        points,
        counterfactual: AnnotationRegion {
            kind: RegionKind::Counterfactual,
            center: bounds.max_point(),
            radius: counterfactual_radius,
        },
        easy_change: AnnotationRegion {
            kind: RegionKind::EasyChange,
            center: bounds.min_point(),
            radius: easy_change_radius,
        },
        legend: legend_entries(),
    };

    debug!(
        title = figure.title,
        points = figure.points.len(),
        green = figure.count_color(PointColor::Green),
        red = figure.count_color(PointColor::Red),
        black = figure.count_color(PointColor::Black),
        "figure built"
    );
    Ok(figure)
}

const fn validate_region(region: &'static str, size: f64) -> Result<f64, PlotError> {
    if size.is_finite() && size >= 0.0 {
        Ok(size)
    } else {
        Err(PlotError::InvalidRegion { region, size })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use constructor_core::{PopulationParams, generate_population, smoking_constructors};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::bounds::AxisRange;

    fn unit_range() -> AxisRange {
        AxisRange::new(0.0, 5.0).unwrap()
    }

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-12 && (a.1 - b.1).abs() < 1e-12
    }

    // -----------------------------------------------------------------------
    // Errors
    // -----------------------------------------------------------------------

    #[test]
    fn empty_population_rejected() {
        let err = build_figure(&[], &PlotOptions::default()).unwrap_err();
        assert!(matches!(err, PlotError::EmptyPopulation));
    }

    #[test]
    fn empty_population_rejected_even_with_ranges() {
        let opts = PlotOptions::default().with_ranges(unit_range(), unit_range());
        assert!(matches!(
            build_figure(&[], &opts),
            Err(PlotError::EmptyPopulation)
        ));
    }

    #[test]
    fn constructor_without_effect_rejected() {
        let set = vec![
            Constructor::new(1.0, 1.0, vec![1.0]).unwrap(),
            Constructor::new(1.0, 1.0, Vec::new()).unwrap(),
        ];
        let err = build_figure(&set, &PlotOptions::default()).unwrap_err();
        assert!(matches!(err, PlotError::MissingEffect { index: 1 }));
    }

    #[test]
    fn negative_region_rejected() {
        let set = vec![Constructor::new(1.0, 1.0, vec![1.0]).unwrap()];
        let opts = PlotOptions {
            easy_change_diameter: -1.0,
            ..PlotOptions::default()
        };
        assert!(matches!(
            build_figure(&set, &opts),
            Err(PlotError::InvalidRegion { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // Encodings and layout
    // -----------------------------------------------------------------------

    #[test]
    fn regions_follow_explicit_ranges() {
        let set = vec![
            Constructor::new(1.2, 0.7, vec![1.0]).unwrap(),
            Constructor::new(2.5, 3.1, vec![-1.0]).unwrap(),
        ];
        let opts = PlotOptions::default().with_ranges(unit_range(), unit_range());
        let figure = build_figure(&set, &opts).unwrap();
        assert!(close(figure.counterfactual.center, (5.0, 5.0)));
        assert!(close(figure.easy_change.center, (0.0, 0.0)));
    }

    #[test]
    fn regions_follow_data_extent_without_ranges() {
        let set = vec![
            Constructor::new(1.0, 2.0, vec![1.0]).unwrap(),
            Constructor::new(4.0, 0.5, vec![1.0]).unwrap(),
        ];
        let figure = build_figure(&set, &PlotOptions::default()).unwrap();
        assert!(close(figure.counterfactual.center, (2.0, 4.0)));
        assert!(close(figure.easy_change.center, (0.5, 1.0)));
        assert!((figure.counterfactual.radius - 2.0).abs() < 1e-12);
    }

    #[test]
    fn only_first_effect_is_encoded() {
        let set = vec![Constructor::new(1.0, 1.0, vec![-2.0, 50.0]).unwrap()];
        let figure = build_figure(&set, &PlotOptions::default()).unwrap();
        let point = figure.points.first().unwrap();
        assert_eq!(point.marker.color, PointColor::Red);
        assert!((point.marker.size - 200.0).abs() < 1e-9);
    }

    #[test]
    fn points_use_time_as_x_and_energy_as_y() {
        let set = vec![Constructor::named("Stress", 1.0, 4.0, vec![-4.0]).unwrap()];
        let figure = build_figure(&set, &PlotOptions::default()).unwrap();
        let point = figure.points.first().unwrap();
        assert!((point.time - 4.0).abs() < 1e-12);
        assert!((point.energy - 1.0).abs() < 1e-12);
        assert_eq!(point.label, "Stress");
    }

    #[test]
    fn legend_has_five_entries() {
        let set = vec![Constructor::new(1.0, 1.0, vec![0.0]).unwrap()];
        let figure = build_figure(&set, &PlotOptions::default()).unwrap();
        let labels: Vec<&str> = figure.legend.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            [
                "Positive effect",
                "Negative effect",
                "No effect",
                "Counterfactuals",
                "Easy change"
            ]
        );
        assert_eq!(figure.count_color(PointColor::Black), 1);
    }

    #[test]
    fn labels_and_title() {
        let set = vec![Constructor::new(1.0, 1.0, vec![1.0]).unwrap()];
        let figure = build_figure(&set, &PlotOptions::default().with_title("")).unwrap();
        assert_eq!(figure.title, "Constructors");
        assert_eq!(figure.x_label, "Time cost to change");
        assert_eq!(figure.y_label, "Energy cost to change");
    }

    // -----------------------------------------------------------------------
    // Scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn smoking_scenario_is_five_green_five_red() {
        let set = smoking_constructors().unwrap();
        let opts = PlotOptions::default()
            .with_ranges(unit_range(), unit_range())
            .with_title("Constructors Smoking");
        let figure = build_figure(&set, &opts).unwrap();
        assert_eq!(figure.points.len(), 10);
        assert_eq!(figure.count_color(PointColor::Green), 5);
        assert_eq!(figure.count_color(PointColor::Red), 5);
        assert_eq!(figure.count_color(PointColor::Black), 0);
    }

    #[test]
    fn random_population_builds() {
        let mut rng = StdRng::seed_from_u64(2024);
        let set = generate_population(10, 2, &PopulationParams::default(), &mut rng).unwrap();
        let opts = PlotOptions::default()
            .with_ranges(unit_range(), unit_range())
            .with_title("Random constructors");
        let figure = build_figure(&set, &opts).unwrap();
        assert_eq!(figure.points.len(), 10);
        assert!(figure.points.iter().all(|p| p.label.is_empty()));
    }
}
