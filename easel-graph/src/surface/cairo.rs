//! A [`Surface`] backed by a [`cairo::Context`], so a scene can render to any target cairo
//! supports, including PNG and SVG.

use cairo::{Context, ImageSurface};
use crate::point::SurfacePoint;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use super::{Color, Surface, SurfaceError, SurfaceRect};

impl From<cairo::Error> for SurfaceError {
    fn from(err: cairo::Error) -> SurfaceError {
        SurfaceError(err.to_string())
    }
}

/// A drawing surface rendering through cairo.
pub struct CairoSurface {
    context: Context,

    /// Images already loaded from disk, keyed by path.
    images: HashMap<PathBuf, ImageSurface>,
}

impl CairoSurface {
    /// Wraps the given cairo context.
    pub fn new(context: Context) -> CairoSurface {
        CairoSurface { context, images: HashMap::new() }
    }

    /// Returns the wrapped cairo context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    fn set_color(&self, color: Color) {
        self.context.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    /// Loads (or fetches the cached) image at `path`.
    fn image(&mut self, path: &Path) -> Result<&ImageSurface, SurfaceError> {
        if !self.images.contains_key(path) {
            let mut file = File::open(path)
                .map_err(|err| SurfaceError(format!("{}: {err}", path.display())))?;
            let image = ImageSurface::create_from_png(&mut file)
                .map_err(|err| SurfaceError(format!("{}: {err}", path.display())))?;
            self.images.insert(path.to_path_buf(), image);
        }
        Ok(&self.images[path])
    }
}

impl Surface for CairoSurface {
    fn stroke_polyline(
        &mut self,
        points: &[SurfacePoint],
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        if rest.is_empty() {
            return Ok(());
        }

        self.set_color(color);
        self.context.set_line_width(width);
        self.context.move_to(first.0, first.1);
        for point in rest {
            self.context.line_to(point.0, point.1);
        }
        self.context.stroke()?;
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: SurfacePoint,
        to: SurfacePoint,
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        self.set_color(color);
        self.context.set_line_width(width);
        self.context.move_to(from.0, from.1);
        self.context.line_to(to.0, to.1);
        self.context.stroke()?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: SurfacePoint,
        size: f64,
        color: Color,
    ) -> Result<(), SurfaceError> {
        self.set_color(color);
        self.context.set_font_size(size);
        self.context.move_to(position.0, position.1);
        self.context.show_text(text)?;
        Ok(())
    }

    fn draw_image(&mut self, path: &Path, rect: SurfaceRect) -> Result<(), SurfaceError> {
        let image = self.image(path)?.clone();
        let (width, height) = (f64::from(image.width()), f64::from(image.height()));
        if width <= 0.0 || height <= 0.0 {
            return Ok(());
        }

        self.context.save()?;
        self.context.translate(rect.x, rect.y);
        self.context.scale(rect.width / width, rect.height / height);
        self.context.set_source_surface(&image, 0.0, 0.0)?;
        self.context.paint()?;
        self.context.restore()?;
        Ok(())
    }

    fn set_clip_rect(&mut self, rect: SurfaceRect) -> Result<(), SurfaceError> {
        // save/restore pairs scope the clip; see clear_clip
        self.context.save()?;
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context.clip();
        Ok(())
    }

    fn clear_clip(&mut self) -> Result<(), SurfaceError> {
        self.context.restore()?;
        Ok(())
    }
}
