//! Cost scatter figures for constructor populations.
//!
//! Each constructor becomes one point at `(time, energy)`. The first
//! effect-vector entry decides the point's colour and marker size; effects
//! on any other variable are not drawn. Two translucent regions mark where
//! change is hardest (counterfactuals, at the maximal corner of the axis
//! bounds) and easiest (at the minimal corner).
//!
//! Building a [`Figure`] is pure and testable; [`render`] draws it to SVG
//! with plotters.
//!
//! # Modules
//!
//! - [`bounds`] -- Axis ranges and bound resolution ([`resolve_bounds`])
//! - [`encoding`] -- Effect-to-marker mapping ([`encode_effect`])
//! - [`error`] -- Error types for figure building and drawing ([`PlotError`])
//! - [`figure`] -- The figure model ([`build_figure`])
//! - [`options`] -- Caller-facing plot options ([`PlotOptions`])
//! - [`render`] -- SVG output via plotters

pub mod bounds;
pub mod encoding;
pub mod error;
pub mod figure;
pub mod options;
pub mod render;

// Re-export primary types at crate root for convenience.
pub use bounds::{AxisRange, PlotBounds, resolve_bounds};
pub use encoding::{Marker, PointColor, SIZE_SCALE, ZERO_EFFECT_SIZE, encode_effect};
pub use error::PlotError;
pub use figure::{
    AnnotationRegion, Figure, LegendEntry, PlottedPoint, RegionKind, Swatch, build_figure,
};
pub use options::PlotOptions;
pub use render::{render, render_svg, render_svg_string};
