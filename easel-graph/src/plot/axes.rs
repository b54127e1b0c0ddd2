//! Zoom-invariant coordinate axes, tick marks, and integer labels.

use crate::point::WorldPoint;
use crate::surface::{Color, Surface, SurfaceError};
use crate::view::ViewTransform;
use super::opts::PlotOptions;

/// The color of axis lines, ticks, and labels (mostly opaque black).
const AXIS_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.78);

/// The on-screen width of axis and tick lines, in surface units.
const AXIS_WIDTH: f64 = 1.0;

/// Label offsets from the tick position, in surface units: below the horizontal axis, and to the
/// right of the vertical axis (baseline-relative).
const X_LABEL_OFFSET: (f64, f64) = (-10.0, 15.0);
const Y_LABEL_OFFSET: (f64, f64) = (5.0, 4.0);

/// Draws the coordinate axes through `origin`, with tick marks and integer labels at fixed
/// world-space spacing.
///
/// Tick length, label offsets, and label text size are screen-constant: they are stored in
/// surface units and divided by the current zoom before being placed in world space, so the axes
/// read the same at any zoom level. The tick at 0 is omitted — it coincides with the axes
/// themselves.
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    origin: WorldPoint,
    view: &ViewTransform,
    opts: &PlotOptions,
) -> Result<(), SurfaceError> {
    let WorldPoint(ox, oy) = origin;

    // the axis lines, long enough to be unbounded at any practical zoom
    surface.stroke_line(
        view.to_surface(WorldPoint(ox - opts.axis_half_extent, oy)),
        view.to_surface(WorldPoint(ox + opts.axis_half_extent, oy)),
        AXIS_COLOR,
        AXIS_WIDTH,
    )?;
    surface.stroke_line(
        view.to_surface(WorldPoint(ox, oy - opts.axis_half_extent)),
        view.to_surface(WorldPoint(ox, oy + opts.axis_half_extent)),
        AXIS_COLOR,
        AXIS_WIDTH,
    )?;

    let half_tick = opts.tick_half_len / view.zoom;

    // ticks and labels along the horizontal axis
    let mut t = -opts.tick_extent;
    while t <= opts.tick_extent {
        if t == 0.0 {
            t += opts.tick_spacing;
            continue;
        }

        let tick_x = ox + t;
        surface.stroke_line(
            view.to_surface(WorldPoint(tick_x, oy - half_tick)),
            view.to_surface(WorldPoint(tick_x, oy + half_tick)),
            AXIS_COLOR,
            AXIS_WIDTH,
        )?;

        let label_at = WorldPoint(
            tick_x + X_LABEL_OFFSET.0 / view.zoom,
            oy + X_LABEL_OFFSET.1 / view.zoom,
        );
        surface.draw_text(
            &format!("{}", t.round() as i64),
            view.to_surface(label_at),
            opts.label_text_size,
            AXIS_COLOR,
        )?;

        t += opts.tick_spacing;
    }

    // ticks and labels along the vertical axis; the world plane is y-down, so the tick for a
    // function value t sits above the origin
    let mut t = -opts.tick_extent;
    while t <= opts.tick_extent {
        if t == 0.0 {
            t += opts.tick_spacing;
            continue;
        }

        let tick_y = oy - t;
        surface.stroke_line(
            view.to_surface(WorldPoint(ox - half_tick, tick_y)),
            view.to_surface(WorldPoint(ox + half_tick, tick_y)),
            AXIS_COLOR,
            AXIS_WIDTH,
        )?;

        let label_at = WorldPoint(
            ox + Y_LABEL_OFFSET.0 / view.zoom,
            tick_y + Y_LABEL_OFFSET.1 / view.zoom,
        );
        surface.draw_text(
            &format!("{}", t.round() as i64),
            view.to_surface(label_at),
            opts.label_text_size,
            AXIS_COLOR,
        )?;

        t += opts.tick_spacing;
    }

    Ok(())
}
