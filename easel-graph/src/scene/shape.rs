//! The drawable primitives a scene holds, and their outline geometry.

use crate::plot::PlottedFunction;
use crate::point::{WorldPoint, WorldRect};
use crate::surface::{Color, Surface, SurfaceError};
use crate::view::ViewTransform;
use std::path::PathBuf;

/// The number of points used to approximate an ellipse outline.
const ELLIPSE_POINTS: usize = 64;

/// One committed element of a drawing.
///
/// Shapes store world-space geometry and world-space stroke widths; the view transform is applied
/// at draw time, so committed shapes are unaffected by later pan and zoom.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A freehand polyline.
    Stroke {
        points: Vec<WorldPoint>,
        color: Color,
        width: f64,
    },

    /// A straight line segment.
    Line {
        from: WorldPoint,
        to: WorldPoint,
        color: Color,
        width: f64,
    },

    /// An axis-aligned rectangle outline.
    Rect {
        rect: WorldRect,
        color: Color,
        width: f64,
    },

    /// An ellipse outline inscribed in its bounding rectangle.
    Ellipse {
        rect: WorldRect,
        color: Color,
        width: f64,
    },

    /// An isosceles triangle outline inscribed in its bounding rectangle, apex at the top.
    Triangle {
        rect: WorldRect,
        color: Color,
        width: f64,
    },

    /// A five-pointed star outline centered in its bounding rectangle.
    Star {
        rect: WorldRect,
        color: Color,
        width: f64,
    },

    /// A raster image scaled into its bounding rectangle.
    Image {
        path: PathBuf,
        rect: WorldRect,
    },

    /// A plotted function.
    Function(PlottedFunction),
}

/// The closed outline of a rectangle: its four corners, first repeated last.
pub fn rect_outline(rect: WorldRect) -> Vec<WorldPoint> {
    let WorldRect { x, y, width, height } = rect;
    vec![
        WorldPoint(x, y),
        WorldPoint(x + width, y),
        WorldPoint(x + width, y + height),
        WorldPoint(x, y + height),
        WorldPoint(x, y),
    ]
}

/// The closed outline of a triangle: top-center apex, then the bottom corners.
pub fn triangle_outline(rect: WorldRect) -> Vec<WorldPoint> {
    let WorldRect { x, y, width, height } = rect;
    vec![
        WorldPoint(x + width / 2.0, y),
        WorldPoint(x + width, y + height),
        WorldPoint(x, y + height),
        WorldPoint(x + width / 2.0, y),
    ]
}

/// The closed outline of an ellipse inscribed in `rect`, as a fixed-count polyline.
pub fn ellipse_outline(rect: WorldRect) -> Vec<WorldPoint> {
    let WorldPoint(cx, cy) = rect.center();
    let rx = rect.width / 2.0;
    let ry = rect.height / 2.0;

    (0..=ELLIPSE_POINTS)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / ELLIPSE_POINTS as f64;
            WorldPoint(cx + rx * angle.cos(), cy + ry * angle.sin())
        })
        .collect()
}

/// The closed outline of a five-pointed star centered in `rect`.
///
/// Alternates between an outer radius of half the smaller rectangle side and an inner radius at
/// 40% of it, starting from the upward-pointing tip.
pub fn star_outline(rect: WorldRect) -> Vec<WorldPoint> {
    let WorldPoint(cx, cy) = rect.center();
    let outer = rect.width.min(rect.height) / 2.0;
    let inner = 0.4 * outer;

    let mut points: Vec<WorldPoint> = (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 5.0;
            WorldPoint(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();
    points.push(points[0]);
    points
}

/// Draws one non-function shape through the view transform.
///
/// Function shapes carry their own render path and are not handled here.
pub(crate) fn draw_shape<S: Surface + ?Sized>(
    shape: &Shape,
    view: &ViewTransform,
    surface: &mut S,
) -> Result<(), SurfaceError> {
    let stroke = |surface: &mut S, points: &[WorldPoint], color: Color, width: f64| {
        let points: Vec<_> = points.iter().map(|point| view.to_surface(*point)).collect();
        surface.stroke_polyline(&points, color, view.scale(width))
    };

    match shape {
        Shape::Stroke { points, color, width } => stroke(surface, points, *color, *width),
        Shape::Line { from, to, color, width } => surface.stroke_line(
            view.to_surface(*from),
            view.to_surface(*to),
            *color,
            view.scale(*width),
        ),
        Shape::Rect { rect, color, width } => stroke(surface, &rect_outline(*rect), *color, *width),
        Shape::Ellipse { rect, color, width } => {
            stroke(surface, &ellipse_outline(*rect), *color, *width)
        },
        Shape::Triangle { rect, color, width } => {
            stroke(surface, &triangle_outline(*rect), *color, *width)
        },
        Shape::Star { rect, color, width } => stroke(surface, &star_outline(*rect), *color, *width),
        Shape::Image { path, rect } => surface.draw_image(path, view.rect_to_surface(*rect)),
        Shape::Function(_) => Ok(()),
    }
}
