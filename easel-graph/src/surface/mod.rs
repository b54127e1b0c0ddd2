//! The drawing surface the renderer writes to.
//!
//! [`Surface`] is the full contract between the core and the host: polyline and line strokes,
//! text, images, and a scoped clip rectangle. Everything the renderer produces goes through these
//! calls, so a backend (or a test) sees the complete output of a render pass.

#[cfg(feature = "cairo")]
mod cairo;

#[cfg(feature = "cairo")]
pub use cairo::CairoSurface;

use crate::point::SurfacePoint;
use std::fmt;
use std::path::{Path, PathBuf};

/// An RGBA color with each channel in the range `0.0` to `1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Creates an opaque color from its RGB channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    /// Creates a color from its RGBA channels.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }
}

/// An axis-aligned rectangle in **surface** (device) units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    /// The x coordinate of the left edge.
    pub x: f64,

    /// The y coordinate of the top edge.
    pub y: f64,

    /// The width of the rectangle.
    pub width: f64,

    /// The height of the rectangle.
    pub height: f64,
}

/// An error raised by a drawing backend.
///
/// Resource failures (a missing image file, an exhausted surface) belong to the backend; the
/// renderer only forwards them.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceError(pub String);

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface error: {}", self.0)
    }
}

impl std::error::Error for SurfaceError {}

/// A drawing surface in device coordinates.
///
/// Coordinates, stroke widths, and text sizes are all in surface units; the renderer applies the
/// [`ViewTransform`](crate::view::ViewTransform) before calling in.
pub trait Surface {
    /// Strokes an open polyline through the given points. Fewer than two points draw nothing.
    fn stroke_polyline(
        &mut self,
        points: &[SurfacePoint],
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError>;

    /// Strokes a single line segment.
    fn stroke_line(
        &mut self,
        from: SurfacePoint,
        to: SurfacePoint,
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError>;

    /// Draws text with its baseline starting at the given position.
    fn draw_text(
        &mut self,
        text: &str,
        position: SurfacePoint,
        size: f64,
        color: Color,
    ) -> Result<(), SurfaceError>;

    /// Draws the image at `path` scaled into the given rectangle.
    fn draw_image(&mut self, path: &Path, rect: SurfaceRect) -> Result<(), SurfaceError>;

    /// Restricts subsequent drawing to the given rectangle, until [`clear_clip`](Self::clear_clip)
    /// is called.
    fn set_clip_rect(&mut self, rect: SurfaceRect) -> Result<(), SurfaceError>;

    /// Restores the unclipped state.
    fn clear_clip(&mut self) -> Result<(), SurfaceError>;
}

/// One recorded [`Surface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Polyline {
        points: Vec<SurfacePoint>,
        color: Color,
        width: f64,
    },
    Line {
        from: SurfacePoint,
        to: SurfacePoint,
        color: Color,
        width: f64,
    },
    Text {
        text: String,
        position: SurfacePoint,
        size: f64,
        color: Color,
    },
    Image {
        path: PathBuf,
        rect: SurfaceRect,
    },
    SetClip(SurfaceRect),
    ClearClip,
}

/// A surface that records every call it receives instead of drawing.
///
/// Used to assert on the exact output of a render pass: determinism, ordering, and clip scoping
/// are all observable from the recorded call sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    /// The calls received so far, in order.
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    /// Returns every recorded polyline, in order.
    pub fn polylines(&self) -> impl Iterator<Item = &[SurfacePoint]> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn stroke_polyline(
        &mut self,
        points: &[SurfacePoint],
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Polyline { points: points.to_vec(), color, width });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: SurfacePoint,
        to: SurfacePoint,
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Line { from, to, color, width });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: SurfacePoint,
        size: f64,
        color: Color,
    ) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Text { text: text.to_string(), position, size, color });
        Ok(())
    }

    fn draw_image(&mut self, path: &Path, rect: SurfaceRect) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Image { path: path.to_path_buf(), rect });
        Ok(())
    }

    fn set_clip_rect(&mut self, rect: SurfaceRect) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::SetClip(rect));
        Ok(())
    }

    fn clear_clip(&mut self) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::ClearClip);
        Ok(())
    }
}
