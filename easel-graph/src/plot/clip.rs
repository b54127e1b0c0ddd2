//! Scoped clipping of the drawing surface.

use crate::surface::{Surface, SurfaceError, SurfaceRect};
use std::ops::{Deref, DerefMut};

/// A clip rectangle installed on a surface for the lifetime of the guard.
///
/// Dropping the guard restores the unclipped state, on every exit path: early returns and `?`
/// propagation out of the drawing code cannot leak the clip into later draws.
///
/// Drawing while the clip is active goes through the guard, which derefs to the surface.
pub struct ClipGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> ClipGuard<'a, S> {
    /// Installs the given clip rectangle on the surface.
    pub fn install(surface: &'a mut S, rect: SurfaceRect) -> Result<Self, SurfaceError> {
        surface.set_clip_rect(rect)?;
        Ok(ClipGuard { surface })
    }
}

impl<S: Surface + ?Sized> Deref for ClipGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for ClipGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for ClipGuard<'_, S> {
    fn drop(&mut self) {
        // nothing useful can be done with a failure here
        let _ = self.surface.clear_clip();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::point::SurfacePoint;
    use crate::surface::{Color, DrawCall, RecordingSurface};
    use super::*;

    fn rect() -> SurfaceRect {
        SurfaceRect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 }
    }

    #[test]
    fn clip_brackets_draws_inside_the_scope() {
        let mut surface = RecordingSurface::new();

        {
            let mut guard = ClipGuard::install(&mut surface, rect()).unwrap();
            guard
                .stroke_line(SurfacePoint(0.0, 0.0), SurfacePoint(5.0, 5.0), Color::BLACK, 1.0)
                .unwrap();
        }
        surface
            .stroke_line(SurfacePoint(1.0, 1.0), SurfacePoint(2.0, 2.0), Color::BLACK, 1.0)
            .unwrap();

        assert_eq!(surface.calls.len(), 4);
        assert_eq!(surface.calls[0], DrawCall::SetClip(rect()));
        assert!(matches!(surface.calls[1], DrawCall::Line { .. }));
        assert_eq!(surface.calls[2], DrawCall::ClearClip);
        assert!(matches!(surface.calls[3], DrawCall::Line { .. }));
    }

    #[test]
    fn clip_is_cleared_on_early_return() {
        fn draw_and_bail(surface: &mut RecordingSurface) -> Result<(), SurfaceError> {
            let _guard = ClipGuard::install(surface, rect())?;
            Err(SurfaceError("bail".to_string()))
        }

        let mut surface = RecordingSurface::new();
        assert!(draw_and_bail(&mut surface).is_err());
        assert_eq!(
            surface.calls,
            vec![DrawCall::SetClip(rect()), DrawCall::ClearClip],
        );
    }
}
