//! Rendering of a plotted function: clip scope, axes, sampling, and strokes.
//!
//! A render pass for one function composes, in order: the clip policy (when the function is
//! restricted to its range), the axis renderer (when axes are requested), the sampler, and one
//! polyline stroke per continuous segment. Every redraw re-samples from scratch; nothing is
//! cached between passes.

pub mod axes;
pub mod clip;
pub mod opts;
pub mod sample;

use crate::point::{WorldPoint, WorldRect};
use crate::surface::{Color, Surface, SurfaceError};
use crate::view::ViewTransform;
use clip::ClipGuard;
pub use opts::PlotOptions;
pub use sample::{sample, Domain, Segment};

/// A function plot committed to the drawing.
///
/// Created once when the user commits a placement and immutable afterward; in particular the
/// expression is never edited in place.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedFunction {
    /// The expression text, in one free variable `x`.
    pub expression: String,

    /// One endpoint of the x range, in world units. The endpoints may be given in any order.
    pub range_start: f64,

    /// The other endpoint of the x range, in world units.
    pub range_end: f64,

    /// The world coordinate mapped to the function's local `(0, 0)`.
    pub origin: WorldPoint,

    /// The stroke color of the curve.
    pub color: Color,

    /// The stroke width of the curve, in world units.
    pub stroke_width: f64,

    /// Whether to draw coordinate axes through the origin.
    pub draw_axes: bool,

    /// Whether to restrict the curve to the x range. When unset, the range is ignored and the
    /// curve spans an effectively unbounded domain.
    pub clip_to_range: bool,
}

impl PlottedFunction {
    /// Creates a plot of the given expression at the given origin, with the dialog's defaults:
    /// range `[-300, 300]`, black, stroke width `2.0`, axes drawn, clipped to the range.
    pub fn new(expression: impl Into<String>, origin: WorldPoint) -> PlottedFunction {
        PlottedFunction {
            expression: expression.into(),
            range_start: -300.0,
            range_end: 300.0,
            origin,
            color: Color::BLACK,
            stroke_width: 2.0,
            draw_axes: true,
            clip_to_range: true,
        }
    }

    /// Sets the x range. Returns the plot itself to allow chaining.
    pub fn with_range(mut self, start: f64, end: f64) -> PlottedFunction {
        self.range_start = start;
        self.range_end = end;
        self
    }

    /// Sets the stroke color. Returns the plot itself to allow chaining.
    pub fn with_color(mut self, color: Color) -> PlottedFunction {
        self.color = color;
        self
    }

    /// Sets the stroke width, in world units. Returns the plot itself to allow chaining.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> PlottedFunction {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets whether axes are drawn. Returns the plot itself to allow chaining.
    pub fn with_axes(mut self, draw_axes: bool) -> PlottedFunction {
        self.draw_axes = draw_axes;
        self
    }

    /// Sets whether the curve is restricted to the x range. Returns the plot itself to allow
    /// chaining.
    pub fn with_clip_to_range(mut self, clip_to_range: bool) -> PlottedFunction {
        self.clip_to_range = clip_to_range;
        self
    }

    /// The sampling domain: the normalized range when the curve is restricted to it, unbounded
    /// otherwise.
    pub fn domain(&self) -> Domain {
        if self.clip_to_range {
            Domain::bounded(self.range_start, self.range_end)
        } else {
            Domain::Unbounded
        }
    }
}

/// Renders one plotted function with the default [`PlotOptions`].
///
/// Invoked once per redraw per function instance; there are no side effects beyond the surface
/// calls made during the invocation, and identical inputs produce identical call sequences.
pub fn render<S: Surface + ?Sized>(
    func: &PlottedFunction,
    view: &ViewTransform,
    surface: &mut S,
) -> Result<(), SurfaceError> {
    render_with(func, view, surface, &PlotOptions::default())
}

/// Renders one plotted function with the given options.
pub fn render_with<S: Surface + ?Sized>(
    func: &PlottedFunction,
    view: &ViewTransform,
    surface: &mut S,
    opts: &PlotOptions,
) -> Result<(), SurfaceError> {
    let segments = sample(&func.expression, func.domain(), func.origin, opts);
    draw_sampled(func, &segments, view, surface, opts)
}

/// Draws a function whose segments have already been sampled.
///
/// Split out so a scene pass can sample all of its functions up front (possibly in parallel) and
/// then draw them in order.
pub(crate) fn draw_sampled<S: Surface + ?Sized>(
    func: &PlottedFunction,
    segments: &[Segment],
    view: &ViewTransform,
    surface: &mut S,
    opts: &PlotOptions,
) -> Result<(), SurfaceError> {
    if func.clip_to_range {
        let lo = func.range_start.min(func.range_end);
        let hi = func.range_start.max(func.range_end);
        let rect = WorldRect {
            x: func.origin.0 + lo,
            y: func.origin.1 - opts.clip_half_extent,
            width: hi - lo,
            height: 2.0 * opts.clip_half_extent,
        };

        let mut guard = ClipGuard::install(surface, view.rect_to_surface(rect))?;
        draw_body(func, segments, view, &mut *guard, opts)
        // dropping the guard restores the unclipped state
    } else {
        draw_body(func, segments, view, surface, opts)
    }
}

/// Axes and segment strokes, drawn inside whatever clip scope the caller set up.
fn draw_body<S: Surface + ?Sized>(
    func: &PlottedFunction,
    segments: &[Segment],
    view: &ViewTransform,
    surface: &mut S,
    opts: &PlotOptions,
) -> Result<(), SurfaceError> {
    if func.draw_axes {
        axes::draw(surface, func.origin, view, opts)?;
    }

    for segment in segments {
        let points: Vec<_> = segment
            .points
            .iter()
            .map(|point| view.to_surface(*point))
            .collect();
        surface.stroke_polyline(&points, func.color, view.scale(func.stroke_width))?;
    }

    Ok(())
}
