//! Walks a function's domain and splits the evaluated curve into continuous segments.

use easel_expr::evaluate;
use crate::point::WorldPoint;
use super::opts::PlotOptions;

/// The x range a function is sampled over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Domain {
    /// An explicit `[lo, hi]` range, with `lo <= hi`.
    Bounded(f64, f64),

    /// No restriction; a very large symmetric range is substituted at sampling time.
    Unbounded,
}

impl Domain {
    /// Creates a bounded domain from two endpoints given in any order.
    pub fn bounded(a: f64, b: f64) -> Domain {
        Domain::Bounded(a.min(b), a.max(b))
    }

    /// Resolves the domain to concrete `(lo, hi)` endpoints.
    pub(crate) fn resolve(self, opts: &PlotOptions) -> (f64, f64) {
        match self {
            Domain::Bounded(lo, hi) => (lo, hi),
            Domain::Unbounded => (-opts.unbounded_half_extent, opts.unbounded_half_extent),
        }
    }
}

/// A maximal run of consecutive samples with no detected discontinuity, ready to be stroked as
/// one polyline.
///
/// Segments are produced fresh on every render pass and never persisted. Every segment holds at
/// least two points, with strictly increasing x and no non-finite coordinate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    /// The points of the polyline, in the y-down world plane.
    pub points: Vec<WorldPoint>,
}

/// Closes the open run, keeping it only if it can be stroked.
fn flush(segments: &mut Vec<Segment>, current: &mut Vec<WorldPoint>) {
    if current.len() >= 2 {
        segments.push(Segment { points: std::mem::take(current) });
    } else {
        current.clear();
    }
}

/// Samples the expression over the domain, splitting the curve at singularities and vertical
/// asymptotes.
///
/// At each step `x`, the curve point is `(origin.x + x, origin.y - y)` — the function's y axis
/// points up, the drawing plane's points down. A non-finite `y` (a genuine domain gap, such as
/// `log` of a non-positive value) closes the current segment and skips the sample. A finite `y`
/// whose vertical delta from the previous point exceeds the excursion limit is treated as a
/// vertical asymptote: it closes the current segment and starts the next one.
///
/// Deterministic: identical inputs produce identical segments.
pub fn sample(
    expression: &str,
    domain: Domain,
    origin: WorldPoint,
    opts: &PlotOptions,
) -> Vec<Segment> {
    let (lo, hi) = domain.resolve(opts);

    let mut segments = Vec::new();
    let mut current: Vec<WorldPoint> = Vec::new();

    let mut x = lo;
    while x <= hi {
        let y = evaluate(expression, x);

        if !y.is_finite() {
            flush(&mut segments, &mut current);
            x += opts.world_step;
            continue;
        }

        let point = WorldPoint(origin.0 + x, origin.1 - y);
        if let Some(last) = current.last() {
            if (point.1 - last.1).abs() > opts.excursion_limit {
                flush(&mut segments, &mut current);
            }
        }
        current.push(point);

        x += opts.world_step;
    }
    flush(&mut segments, &mut current);

    segments
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn assert_well_formed(segments: &[Segment], opts: &PlotOptions) {
        for segment in segments {
            assert!(segment.points.len() >= 2);
            for pair in segment.points.windows(2) {
                assert!(pair[0].0 < pair[1].0, "x must strictly increase");
                assert!(
                    (pair[1].1 - pair[0].1).abs() <= opts.excursion_limit,
                    "no excursion may survive inside a segment",
                );
            }
            for point in &segment.points {
                assert!(point.0.is_finite() && point.1.is_finite());
            }
        }
    }

    #[test]
    fn identity_line() {
        let opts = PlotOptions::default().world_step(1.0);
        let segments = sample("x", Domain::bounded(-10.0, 10.0), WorldPoint(0.0, 0.0), &opts);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].points.len(), 21);
        for (i, point) in segments[0].points.iter().enumerate() {
            let x = -10.0 + i as f64;
            // the y axis is inverted into the y-down plane
            assert_eq!(*point, WorldPoint(x, -x));
        }
    }

    #[test]
    fn origin_offsets_the_curve() {
        let opts = PlotOptions::default().world_step(1.0);
        let origin = WorldPoint(100.0, 40.0);
        let segments = sample("x", Domain::bounded(0.0, 2.0), origin, &opts);

        assert_eq!(
            segments,
            vec![Segment {
                points: vec![
                    WorldPoint(100.0, 40.0),
                    WorldPoint(101.0, 39.0),
                    WorldPoint(102.0, 38.0),
                ],
            }],
        );
    }

    #[test]
    fn singularity_splits_segments() {
        // log(x^2 - 1) is undefined on [-1, 1]
        let opts = PlotOptions::default();
        let segments = sample("log(x^2 - 1)", Domain::bounded(-2.0, 2.0), WorldPoint(0.0, 0.0), &opts);

        assert!(segments.len() >= 2, "expected a split, got {} segment(s)", segments.len());
        assert_well_formed(&segments, &opts);
        for segment in &segments {
            let inside_gap = segment
                .points
                .iter()
                .any(|point| point.0 > -0.9 && point.0 < 0.9);
            assert!(!inside_gap, "no segment may cross the undefined region");
        }
    }

    #[test]
    fn excursion_splits_segments() {
        // 1/x^2 blows up around 0 without ever evaluating to a non-finite value here
        let opts = PlotOptions::default();
        let segments = sample("1/(x*x)", Domain::bounded(-1.0, 1.0), WorldPoint(0.0, 0.0), &opts);

        assert!(segments.len() >= 2, "expected a split, got {} segment(s)", segments.len());
        assert_well_formed(&segments, &opts);
    }

    #[test]
    fn unbounded_domain_is_substituted() {
        let opts = PlotOptions::default()
            .world_step(1.0)
            .unbounded_half_extent(10.0);
        let segments = sample("x", Domain::Unbounded, WorldPoint(0.0, 0.0), &opts);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].points.len(), 21);
        assert_eq!(segments[0].points[0].0, -10.0);
        assert_eq!(segments[0].points[20].0, 10.0);
    }

    #[test]
    fn endpoints_normalize() {
        assert_eq!(Domain::bounded(5.0, -5.0), Domain::Bounded(-5.0, 5.0));
    }

    #[test]
    fn deterministic() {
        let opts = PlotOptions::default();
        let a = sample("tan(x)", Domain::bounded(-3.0, 3.0), WorldPoint(7.0, -2.0), &opts);
        let b = sample("tan(x)", Domain::bounded(-3.0, 3.0), WorldPoint(7.0, -2.0), &opts);
        assert_eq!(a, b);
    }
}
