/// A pair of `(x, y)` values in **world** units.
///
/// World space is the logical drawing plane, invariant under pan and zoom. It is oriented like
/// the surface: y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPoint(pub f64, pub f64);

impl From<(f64, f64)> for WorldPoint {
    fn from((x, y): (f64, f64)) -> WorldPoint {
        WorldPoint(x, y)
    }
}

/// A pair of `(x, y)` values in **surface** (device) units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfacePoint(pub f64, pub f64);

impl From<(f64, f64)> for SurfacePoint {
    fn from((x, y): (f64, f64)) -> SurfacePoint {
        SurfacePoint(x, y)
    }
}

/// An axis-aligned rectangle in **world** units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldRect {
    /// The x coordinate of the left edge.
    pub x: f64,

    /// The y coordinate of the top edge.
    pub y: f64,

    /// The width of the rectangle.
    pub width: f64,

    /// The height of the rectangle.
    pub height: f64,
}

impl WorldRect {
    /// Creates the rectangle spanned by two opposite corners, given in any order.
    pub fn from_corners(a: WorldPoint, b: WorldPoint) -> WorldRect {
        WorldRect {
            x: a.0.min(b.0),
            y: a.1.min(b.1),
            width: (b.0 - a.0).abs(),
            height: (b.1 - a.1).abs(),
        }
    }

    /// Returns the center of the rectangle.
    pub fn center(&self) -> WorldPoint {
        WorldPoint(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
