//! The scene: every committed shape, the view transform, and the tool defaults.

pub mod shape;

use rayon::prelude::*;
use crate::plot::{self, sample, PlotOptions, Segment};
use crate::point::SurfacePoint;
use crate::surface::{Color, Surface, SurfaceError};
use crate::view::ViewTransform;
pub use shape::Shape;

/// A drawing: the ordered list of committed shapes plus the current view and tool settings.
///
/// Shapes render in insertion order, later shapes over earlier ones. The scene owns no surface;
/// each redraw replays every shape onto whatever surface the host passes in.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The committed shapes, oldest first.
    pub shapes: Vec<Shape>,

    /// The current pan and zoom.
    pub view: ViewTransform,

    /// The stroke color new shapes are created with.
    pub stroke_color: Color,

    /// The stroke width new shapes are created with, in surface units. Divide by the current zoom
    /// when committing so a committed shape keeps its on-screen weight.
    pub stroke_width: f64,

    /// The options function plots are sampled and drawn with.
    pub opts: PlotOptions,
}

impl Default for Scene {
    fn default() -> Scene {
        Scene::new()
    }
}

impl Scene {
    /// Creates an empty scene with the identity view, black strokes of width `2.0`, and default
    /// plot options.
    pub fn new() -> Scene {
        Scene {
            shapes: Vec::new(),
            view: ViewTransform::default(),
            stroke_color: Color::BLACK,
            stroke_width: 2.0,
            opts: PlotOptions::default(),
        }
    }

    /// Commits a shape to the drawing.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes every committed shape. The view and tool settings are kept.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Pans the view by the given surface-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.view.pan_by(dx, dy);
    }

    /// Zooms about the given surface-space cursor. Out-of-range gestures leave the view unchanged.
    pub fn zoom_about(&mut self, cursor: SurfacePoint, factor: f64) {
        self.view.zoom_about(cursor, factor);
    }

    /// The current stroke width expressed in world units, so a shape committed now keeps its
    /// on-screen weight at the current zoom.
    pub fn world_stroke_width(&self) -> f64 {
        self.stroke_width / self.view.zoom
    }

    /// Replays every shape onto the surface, in insertion order.
    ///
    /// Function plots are sampled up front in parallel, one job per plot; the draw calls
    /// themselves are then issued sequentially, so the recorded output is deterministic and
    /// ordered regardless of how the sampling jobs are scheduled.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        let sampled: Vec<Option<Vec<Segment>>> = self
            .shapes
            .par_iter()
            .map(|shape| match shape {
                Shape::Function(func) => {
                    Some(sample(&func.expression, func.domain(), func.origin, &self.opts))
                },
                _ => None,
            })
            .collect();

        for (shape, segments) in self.shapes.iter().zip(&sampled) {
            match shape {
                Shape::Function(func) => plot::draw_sampled(
                    func,
                    segments.as_deref().unwrap_or_default(),
                    &self.view,
                    surface,
                    &self.opts,
                )?,
                _ => shape::draw_shape(shape, &self.view, surface)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::plot::PlottedFunction;
    use crate::point::{WorldPoint, WorldRect};
    use crate::surface::{DrawCall, RecordingSurface};
    use super::*;

    fn scene_with_everything() -> Scene {
        let mut scene = Scene::new();
        scene.opts = PlotOptions::default().world_step(1.0).tick_extent(100.0);
        scene.push(Shape::Line {
            from: WorldPoint(0.0, 0.0),
            to: WorldPoint(10.0, 10.0),
            color: Color::BLACK,
            width: 1.0,
        });
        scene.push(Shape::Function(
            PlottedFunction::new("sin(x)*10", WorldPoint(50.0, 50.0)).with_range(-20.0, 20.0),
        ));
        scene.push(Shape::Rect {
            rect: WorldRect { x: 5.0, y: 5.0, width: 4.0, height: 3.0 },
            color: Color::rgb(1.0, 0.0, 0.0),
            width: 2.0,
        });
        scene
    }

    #[test]
    fn shapes_render_in_insertion_order() {
        let mut surface = RecordingSurface::new();
        scene_with_everything().render(&mut surface).unwrap();

        // the line first, then the function's clip scope, then the rectangle outline
        assert!(matches!(surface.calls[0], DrawCall::Line { .. }));
        assert!(matches!(surface.calls[1], DrawCall::SetClip(_)));
        let clear_at = surface
            .calls
            .iter()
            .position(|call| *call == DrawCall::ClearClip)
            .unwrap();
        assert!(matches!(surface.calls[clear_at + 1], DrawCall::Polyline { .. }));
        assert_eq!(clear_at + 2, surface.calls.len());
    }

    #[test]
    fn render_is_deterministic() {
        let scene = scene_with_everything();

        let mut first = RecordingSurface::new();
        scene.render(&mut first).unwrap();
        let mut second = RecordingSurface::new();
        scene.render(&mut second).unwrap();

        assert!(!first.calls.is_empty());
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn clear_keeps_view_and_tool_settings() {
        let mut scene = scene_with_everything();
        scene.zoom_about(SurfacePoint(0.0, 0.0), 2.0);
        scene.stroke_color = Color::rgb(0.0, 0.0, 1.0);
        scene.clear();

        assert!(scene.shapes.is_empty());
        assert_eq!(scene.view.zoom, 2.0);
        assert_eq!(scene.stroke_color, Color::rgb(0.0, 0.0, 1.0));

        let mut surface = RecordingSurface::new();
        scene.render(&mut surface).unwrap();
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn world_stroke_width_counters_the_zoom() {
        let mut scene = Scene::new();
        assert_eq!(scene.world_stroke_width(), 2.0);

        scene.zoom_about(SurfacePoint(0.0, 0.0), 4.0);
        assert_eq!(scene.world_stroke_width(), 0.5);
    }
}
