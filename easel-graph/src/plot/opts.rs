/// Options to use when sampling and drawing a plotted function.
#[derive(Clone, Copy, Debug)]
pub struct PlotOptions {
    /// The sampling step along the x axis, in world units.
    ///
    /// The default value is `0.05`.
    pub world_step: f64,

    /// Half of the symmetric domain substituted when the function is not restricted to an
    /// explicit range, in world units.
    ///
    /// The default value is `50_000.0`.
    pub unbounded_half_extent: f64,

    /// The vertical delta between consecutive samples that is treated as a vertical asymptote,
    /// closing the current segment instead of drawing a near-vertical connector.
    ///
    /// The default value is `2_000.0`.
    pub excursion_limit: f64,

    /// Half of the vertical extent of the clip rectangle installed when the function is
    /// restricted to its range, in world units. Effectively unbounded at any practical zoom.
    ///
    /// The default value is `100_000.0`.
    pub clip_half_extent: f64,

    /// Half of the length of each coordinate axis line, in world units. Effectively unbounded at
    /// any practical zoom.
    ///
    /// The default value is `100_000.0`.
    pub axis_half_extent: f64,

    /// The distance between tick marks along each axis, in world units.
    ///
    /// The default value is `50.0`.
    pub tick_spacing: f64,

    /// How far along each axis tick marks and labels are placed, in world units, on both sides of
    /// the origin.
    ///
    /// The default value is `3_000.0`.
    pub tick_extent: f64,

    /// Half of the length of a tick mark, in surface units. Divided by the current zoom so ticks
    /// stay the same size on screen at any zoom level.
    ///
    /// The default value is `3.0`.
    pub tick_half_len: f64,

    /// The text size of tick labels, in surface units, constant across zoom levels.
    ///
    /// The default value is `10.0`.
    pub label_text_size: f64,
}

/// The default options for a plotted function. Returns a [`PlotOptions`] with the following
/// values:
///
/// - [`world_step`](PlotOptions::world_step): `0.05`
/// - [`unbounded_half_extent`](PlotOptions::unbounded_half_extent): `50_000.0`
/// - [`excursion_limit`](PlotOptions::excursion_limit): `2_000.0`
/// - [`clip_half_extent`](PlotOptions::clip_half_extent): `100_000.0`
/// - [`axis_half_extent`](PlotOptions::axis_half_extent): `100_000.0`
/// - [`tick_spacing`](PlotOptions::tick_spacing): `50.0`
/// - [`tick_extent`](PlotOptions::tick_extent): `3_000.0`
/// - [`tick_half_len`](PlotOptions::tick_half_len): `3.0`
/// - [`label_text_size`](PlotOptions::label_text_size): `10.0`
impl Default for PlotOptions {
    fn default() -> PlotOptions {
        PlotOptions {
            world_step: 0.05,
            unbounded_half_extent: 50_000.0,
            excursion_limit: 2_000.0,
            clip_half_extent: 100_000.0,
            axis_half_extent: 100_000.0,
            tick_spacing: 50.0,
            tick_extent: 3_000.0,
            tick_half_len: 3.0,
            label_text_size: 10.0,
        }
    }
}

impl PlotOptions {
    /// Set the sampling step. Returns updated [`PlotOptions`] for chaining.
    pub fn world_step(mut self, world_step: f64) -> Self {
        self.world_step = world_step;
        self
    }

    /// Set the substituted unbounded half-domain. Returns updated [`PlotOptions`] for chaining.
    pub fn unbounded_half_extent(mut self, unbounded_half_extent: f64) -> Self {
        self.unbounded_half_extent = unbounded_half_extent;
        self
    }

    /// Set the vertical asymptote threshold. Returns updated [`PlotOptions`] for chaining.
    pub fn excursion_limit(mut self, excursion_limit: f64) -> Self {
        self.excursion_limit = excursion_limit;
        self
    }

    /// Set the clip rectangle's vertical half-extent. Returns updated [`PlotOptions`] for
    /// chaining.
    pub fn clip_half_extent(mut self, clip_half_extent: f64) -> Self {
        self.clip_half_extent = clip_half_extent;
        self
    }

    /// Set the axis line half-length. Returns updated [`PlotOptions`] for chaining.
    pub fn axis_half_extent(mut self, axis_half_extent: f64) -> Self {
        self.axis_half_extent = axis_half_extent;
        self
    }

    /// Set the tick spacing. Returns updated [`PlotOptions`] for chaining.
    pub fn tick_spacing(mut self, tick_spacing: f64) -> Self {
        self.tick_spacing = tick_spacing;
        self
    }

    /// Set the tick extent. Returns updated [`PlotOptions`] for chaining.
    pub fn tick_extent(mut self, tick_extent: f64) -> Self {
        self.tick_extent = tick_extent;
        self
    }

    /// Set the on-screen tick half-length. Returns updated [`PlotOptions`] for chaining.
    pub fn tick_half_len(mut self, tick_half_len: f64) -> Self {
        self.tick_half_len = tick_half_len;
        self
    }

    /// Set the on-screen label text size. Returns updated [`PlotOptions`] for chaining.
    pub fn label_text_size(mut self, label_text_size: f64) -> Self {
        self.label_text_size = label_text_size;
        self
    }
}
