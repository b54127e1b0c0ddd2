//! Adaptive rendering of freeform drawings with plotted functions.
//!
//! A [`Scene`] holds the committed [`Shape`]s of a drawing together with the pan-and-zoom
//! [`ViewTransform`]; every redraw replays the whole scene onto a [`Surface`]. Function plots are
//! re-sampled on every pass, splitting the curve at singularities and vertical asymptotes so no
//! spurious connector is ever stroked.
//!
//! # Example
//!
//! To plot a function into a recorded call sequence:
//!
//! ```
//! use easel_graph::{PlottedFunction, RecordingSurface, Scene, Shape, WorldPoint};
//!
//! let mut scene = Scene::new();
//! scene.push(Shape::Function(
//!     PlottedFunction::new("sin(x)*50", WorldPoint(200.0, 200.0))
//!         .with_range(-150.0, 150.0),
//! ));
//!
//! let mut surface = RecordingSurface::new();
//! scene.render(&mut surface).unwrap();
//! assert!(surface.polylines().next().is_some());
//! ```
//!
//! The `cairo` feature adds `CairoSurface`, a backend that strokes onto a cairo context.

pub mod plot;
pub mod point;
pub mod scene;
pub mod surface;
pub mod view;

pub use plot::{render, render_with, sample, Domain, PlotOptions, PlottedFunction, Segment};
pub use point::{SurfacePoint, WorldPoint, WorldRect};
pub use scene::{Scene, Shape};
pub use surface::{Color, DrawCall, RecordingSurface, Surface, SurfaceError, SurfaceRect};
pub use view::ViewTransform;

#[cfg(feature = "cairo")]
pub use surface::CairoSurface;
