use crate::point::{SurfacePoint, WorldPoint, WorldRect};
use crate::surface::SurfaceRect;

/// The affine zoom-and-pan mapping between world space and surface space.
///
/// `surface = world * zoom + pan`. The transform is process-wide state: every render pass reads
/// it, and only pan/zoom input mutates it, serialized with redraws by the host's event loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// The zoom factor. Always positive.
    pub zoom: f64,

    /// The horizontal pan offset, in surface units.
    pub pan_x: f64,

    /// The vertical pan offset, in surface units.
    pub pan_y: f64,
}

/// The identity transform: zoom 1, no pan. World and surface space coincide.
impl Default for ViewTransform {
    fn default() -> ViewTransform {
        ViewTransform { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

impl ViewTransform {
    /// The smallest zoom a gesture can reach.
    pub const MIN_ZOOM: f64 = 0.1;

    /// The largest zoom a gesture can reach.
    pub const MAX_ZOOM: f64 = 50.0;

    /// Converts a point in **world** space to **surface** space.
    pub fn to_surface(&self, point: WorldPoint) -> SurfacePoint {
        SurfacePoint(
            point.0 * self.zoom + self.pan_x,
            point.1 * self.zoom + self.pan_y,
        )
    }

    /// Converts a point in **surface** space to **world** space.
    pub fn to_world(&self, point: SurfacePoint) -> WorldPoint {
        WorldPoint(
            (point.0 - self.pan_x) / self.zoom,
            (point.1 - self.pan_y) / self.zoom,
        )
    }

    /// Converts a length in world units to surface units.
    pub fn scale(&self, length: f64) -> f64 {
        length * self.zoom
    }

    /// Converts a rectangle in **world** space to **surface** space.
    pub fn rect_to_surface(&self, rect: WorldRect) -> SurfaceRect {
        let top_left = self.to_surface(WorldPoint(rect.x, rect.y));
        SurfaceRect {
            x: top_left.0,
            y: top_left.1,
            width: self.scale(rect.width),
            height: self.scale(rect.height),
        }
    }

    /// Pans the view by the given surface-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Zooms by `factor`, keeping the world point under the given surface-space cursor fixed.
    ///
    /// A factor that would push the zoom outside `[MIN_ZOOM, MAX_ZOOM]` is ignored, leaving the
    /// view unchanged.
    pub fn zoom_about(&mut self, cursor: SurfacePoint, factor: f64) {
        let next = self.zoom * factor;
        if !(Self::MIN_ZOOM..=Self::MAX_ZOOM).contains(&next) {
            return;
        }

        self.zoom = next;
        self.pan_x = cursor.0 - (cursor.0 - self.pan_x) * factor;
        self.pan_y = cursor.1 - (cursor.1 - self.pan_y) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the conversion functions between world and surface space.
    #[test]
    fn world_to_surface_round_trip() {
        let view = ViewTransform { zoom: 2.5, pan_x: 120.0, pan_y: -40.0 };

        assert_eq!(view.to_surface(WorldPoint(0.0, 0.0)), SurfacePoint(120.0, -40.0));
        assert_eq!(view.to_surface(WorldPoint(4.0, -8.0)), SurfacePoint(130.0, -60.0));
        assert_eq!(view.to_world(view.to_surface(WorldPoint(17.25, -3.5))), WorldPoint(17.25, -3.5));
    }

    #[test]
    fn identity_by_default() {
        let view = ViewTransform::default();
        assert_eq!(view.to_surface(WorldPoint(3.0, 7.0)), SurfacePoint(3.0, 7.0));
        assert_eq!(view.scale(2.0), 2.0);
    }

    /// Zooming about a cursor keeps the world point under the cursor fixed.
    #[test]
    fn zoom_about_anchors_cursor() {
        let mut view = ViewTransform { zoom: 1.0, pan_x: 30.0, pan_y: 10.0 };
        let cursor = SurfacePoint(200.0, 150.0);
        let anchored = view.to_world(cursor);

        view.zoom_about(cursor, 1.1);
        view.zoom_about(cursor, 1.1);
        view.zoom_about(cursor, 0.9);

        let after = view.to_surface(anchored);
        assert!((after.0 - cursor.0).abs() < 1e-9);
        assert!((after.1 - cursor.1).abs() < 1e-9);
    }

    /// A gesture past the zoom bounds is a no-op.
    #[test]
    fn zoom_is_clamped() {
        let mut view = ViewTransform { zoom: 49.0, pan_x: 0.0, pan_y: 0.0 };
        let before = view;
        view.zoom_about(SurfacePoint(0.0, 0.0), 1.1);
        assert_eq!(view, before);

        let mut view = ViewTransform { zoom: 0.11, pan_x: 5.0, pan_y: 5.0 };
        let before = view;
        view.zoom_about(SurfacePoint(0.0, 0.0), 0.9);
        assert_eq!(view, before);
    }
}
