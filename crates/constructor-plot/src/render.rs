//! SVG output via plotters.
//!
//! The renderer draws exactly what a [`Figure`] describes: translucent
//! annotation regions first, then the scatter markers, point labels, and
//! a lower-right legend. Markers outside the displayed axes are skipped
//! and region outlines are clipped to them.

use std::f64::consts::TAU;
use std::path::Path;

use constructor_core::Constructor;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::info;

use crate::bounds::AxisRange;
use crate::encoding::PointColor;
use crate::error::PlotError;
use crate::figure::{AnnotationRegion, Figure, RegionKind, Swatch, build_figure};
use crate::options::PlotOptions;

/// Vertices used to approximate a region circle.
const CIRCLE_SEGMENTS: u32 = 96;

/// Half-width added around a zero-width axis so it can still be drawn.
const DEGENERATE_PAD: f64 = 0.5;

/// Build the figure for `constructors` and write it as SVG to `path`.
///
/// Blocks until the file is written and returns the drawn figure.
///
/// # Errors
///
/// Returns any error from [`build_figure`] or [`render_svg`].
pub fn render(
    constructors: &[Constructor],
    options: &PlotOptions,
    path: &Path,
    size: (u32, u32),
) -> Result<Figure, PlotError> {
    let figure = build_figure(constructors, options)?;
    render_svg(&figure, path, size)?;
    info!(
        title = figure.title,
        path = %path.display(),
        points = figure.points.len(),
        "figure written"
    );
    Ok(figure)
}

/// Draw `figure` into an SVG file at `path`.
///
/// # Errors
///
/// Returns [`PlotError::Backend`] if drawing or writing the file fails.
pub fn render_svg(figure: &Figure, path: &Path, size: (u32, u32)) -> Result<(), PlotError> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_figure(&root, figure)?;
    root.present().map_err(backend_error)
}

/// Draw `figure` into an in-memory SVG document.
///
/// # Errors
///
/// Returns [`PlotError::Backend`] if drawing fails.
pub fn render_svg_string(figure: &Figure, size: (u32, u32)) -> Result<String, PlotError> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        draw_figure(&root, figure)?;
        root.present().map_err(backend_error)?;
    }
    Ok(buffer)
}

fn draw_figure(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    figure: &Figure,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(backend_error)?;

    let x_span = display_span(&figure.bounds.x);
    let y_span = display_span(&figure.bounds.y);

    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(46)
        .y_label_area_size(60)
        .build_cartesian_2d(x_span.0..x_span.1, y_span.0..y_span.1)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc(figure.x_label)
        .y_desc(figure.y_label)
        .draw()
        .map_err(backend_error)?;

    for region in figure.regions() {
        let vertices = circle_vertices(region, x_span, y_span);
        chart
            .draw_series(std::iter::once(Polygon::new(
                vertices,
                region_color(region.kind).filled(),
            )))
            .map_err(backend_error)?;
    }

    let visible = || {
        figure
            .points
            .iter()
            .filter(move |p| within(p.time, x_span) && within(p.energy, y_span))
    };

    chart
        .draw_series(visible().map(|p| {
            Circle::new(
                (p.time, p.energy),
                marker_radius(p.marker.size),
                point_color(p.marker.color).filled(),
            )
        }))
        .map_err(backend_error)?;

    chart
        .draw_series(visible().filter(|p| !p.label.is_empty()).map(|p| {
            Text::new(
                p.label.clone(),
                (p.time, p.energy),
                ("sans-serif", 13).into_font(),
            )
        }))
        .map_err(backend_error)?;

    // Legend-only series keep the entries in figure order, independent of
    // which colours actually occur.
    for entry in &figure.legend {
        let color = swatch_color(entry.swatch);
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
            .map_err(backend_error)?
            .label(entry.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend_error)?;

    Ok(())
}

fn backend_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Backend {
        message: format!("{err}"),
    }
}

const fn display_span(range: &AxisRange) -> (f64, f64) {
    if range.is_degenerate() {
        (range.min() - DEGENERATE_PAD, range.max() + DEGENERATE_PAD)
    } else {
        (range.min(), range.max())
    }
}

const fn within(value: f64, span: (f64, f64)) -> bool {
    value >= span.0 && value <= span.1
}

/// Region outline in data units, clamped to the displayed axes.
fn circle_vertices(
    region: &AnnotationRegion,
    x_span: (f64, f64),
    y_span: (f64, f64),
) -> Vec<(f64, f64)> {
    let (cx, cy) = region.center;
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = TAU * f64::from(i) / f64::from(CIRCLE_SEGMENTS);
            let x = region.radius.mul_add(angle.cos(), cx);
            let y = region.radius.mul_add(angle.sin(), cy);
            (x.clamp(x_span.0, x_span.1), y.clamp(y_span.0, y_span.1))
        })
        .collect()
}

/// Marker area (square points) to pixel radius, never below one pixel.
#[allow(clippy::cast_possible_truncation)]
fn marker_radius(area: f64) -> i32 {
    (area.sqrt() / 2.0).round().max(1.0) as i32
}

const fn point_color(color: PointColor) -> RGBColor {
    match color {
        PointColor::Green => GREEN,
        PointColor::Red => RED,
        PointColor::Black => BLACK,
    }
}

fn region_color(kind: RegionKind) -> RGBAColor {
    match kind {
        RegionKind::Counterfactual => BLACK.mix(0.5),
        RegionKind::EasyChange => BLUE.mix(0.5),
    }
}

fn swatch_color(swatch: Swatch) -> RGBAColor {
    match swatch {
        Swatch::Point(color) => point_color(color).to_rgba(),
        Swatch::Region(kind) => region_color(kind),
    }
}
