//! Turning infinitely thin lines and curves into paintable sub-paths.
//!
//! With a line width of zero (or less) a segment becomes an open two point
//! sub-path that follows it exactly. With a positive line width it becomes a
//! four point band of that width centered on the segment:
//!
//! ```text
//!   p0 + t ---------------- p1 + t
//!     |                        |
//!   p0 ······················· p1
//!     |                        |
//!   p0 - t ---------------- p1 - t
//! ```
//!
//! where `t` is the unit normal of the segment scaled to half the line width.
//!
//! For curves, the normal is computed independently at each end from the
//! handle direction and the control points are shifted by the same amount as
//! their end point. This is exact at the ends and a first order approximation
//! in between, which is fine for pencil-like strokes that are thin compared to
//! the radius of the curve.
//!
//! Bands are emitted with `closed = false` unless `StrokeOptions::close_bands`
//! is set.

use crate::geom::{CubicBezierSegment, LineSegment, Segment};
use crate::math::{Point, Vector};
use crate::{PathPoint, SubPath};

/// Parameters for the stroke builder.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StrokeOptions {
    /// Width of the band. Zero or less produces two point sub-paths.
    ///
    /// Default value: `StrokeOptions::DEFAULT_LINE_WIDTH`.
    pub line_width: f64,

    /// Mark four point bands as closed.
    ///
    /// Default value: `false`.
    pub close_bands: bool,
}

impl StrokeOptions {
    pub const DEFAULT_LINE_WIDTH: f64 = 0.0;

    pub const DEFAULT: Self = StrokeOptions {
        line_width: Self::DEFAULT_LINE_WIDTH,
        close_bands: false,
    };

    #[inline]
    pub fn line_width(line_width: f64) -> Self {
        Self::DEFAULT.with_line_width(line_width)
    }

    #[inline]
    pub const fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[inline]
    pub const fn with_close_bands(mut self, close_bands: bool) -> Self {
        self.close_bands = close_bands;
        self
    }
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builds one sub-path per line or curve segment.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StrokeBuilder {
    options: StrokeOptions,
}

impl StrokeBuilder {
    pub fn new(options: StrokeOptions) -> Self {
        StrokeBuilder { options }
    }

    pub fn options(&self) -> &StrokeOptions {
        &self.options
    }

    #[inline]
    fn is_band(&self) -> bool {
        self.options.line_width > 0.0
    }

    #[inline]
    fn half_width(&self) -> f64 {
        self.options.line_width * 0.5
    }

    /// Offsets of the band edges at both ends of a segment.
    fn end_offsets<T: Segment<Scalar = f64>>(&self, segment: &T) -> (Vector, Vector) {
        let hw = self.half_width();
        (segment.start_normal() * hw, segment.end_normal() * hw)
    }

    /// Builds the sub-path for the straight segment `p0 -> p1`.
    ///
    /// With a positive line width, coincident end points give non-finite
    /// coordinates.
    pub fn build_line(&self, p0: Point, p1: Point) -> SubPath {
        self.line_segment(&LineSegment { from: p0, to: p1 })
    }

    pub fn line_segment(&self, segment: &LineSegment<f64>) -> SubPath {
        if !self.is_band() {
            let points = vec![
                PathPoint::corner(segment.from),
                PathPoint::corner(segment.to),
            ];
            return SubPath::new(points, false);
        }

        let (t, _) = self.end_offsets(segment);
        let points = vec![
            PathPoint::corner(segment.from + t),
            PathPoint::corner(segment.to + t),
            PathPoint::corner(segment.to - t),
            PathPoint::corner(segment.from - t),
        ];

        SubPath::new(points, self.options.close_bands)
    }

    /// Builds the sub-path for the cubic bézier curve `p0 -> k0 -> k1 -> p1`.
    ///
    /// `k0` is the handle leaving `p0` and `k1` the handle arriving at `p1`. With a
    /// positive line width, a handle sitting on its end point gives non-finite
    /// coordinates.
    pub fn build_curve(&self, p0: Point, k0: Point, k1: Point, p1: Point) -> SubPath {
        self.cubic_segment(&CubicBezierSegment {
            from: p0,
            ctrl1: k0,
            ctrl2: k1,
            to: p1,
        })
    }

    pub fn cubic_segment(&self, curve: &CubicBezierSegment<f64>) -> SubPath {
        if !self.is_band() {
            let points = vec![
                PathPoint::smooth(curve.from, curve.from, curve.ctrl1),
                PathPoint::smooth(curve.ctrl2, curve.to, curve.to),
            ];
            return SubPath::new(points, false);
        }

        let (t0, t1) = self.end_offsets(curve);

        // Outer edge follows the curve, the inner edge walks it backwards.
        let outer = curve.translate(t0).with_end_offset(t1 - t0);
        let inner = curve.translate(-t0).with_end_offset(t0 - t1).flip();

        let points = vec![
            PathPoint::smooth(outer.from, outer.from, outer.ctrl1),
            PathPoint::smooth(outer.ctrl2, outer.to, outer.to),
            PathPoint::smooth(inner.from, inner.from, inner.ctrl1),
            PathPoint::smooth(inner.ctrl2, inner.to, inner.to),
        ];

        SubPath::new(points, self.options.close_bands)
    }
}

trait EndOffset {
    fn with_end_offset(self, by: Vector) -> Self;
}

impl EndOffset for CubicBezierSegment<f64> {
    // Moves the end point and its handle, leaving the start untouched.
    fn with_end_offset(mut self, by: Vector) -> Self {
        self.ctrl2 += by;
        self.to += by;
        self
    }
}

/// Shorthand for `StrokeBuilder::new(StrokeOptions::line_width(width)).build_line(p0, p1)`.
pub fn build_line(width: f64, p0: Point, p1: Point) -> SubPath {
    StrokeBuilder::new(StrokeOptions::line_width(width)).build_line(p0, p1)
}

/// Shorthand for `StrokeBuilder::new(StrokeOptions::line_width(width)).build_curve(p0, k0, k1, p1)`.
pub fn build_curve(width: f64, p0: Point, k0: Point, k1: Point, p1: Point) -> SubPath {
    StrokeBuilder::new(StrokeOptions::line_width(width)).build_curve(p0, k0, k1, p1)
}

#[cfg(test)]
use crate::math::{point, vector};
#[cfg(test)]
use crate::PathPointKind;

#[cfg(test)]
fn fuzzy_eq_f64(a: f64, b: f64, epsilon: f64) -> bool {
    f64::abs(a - b) <= epsilon
}

#[test]
fn zero_width_line() {
    for width in &[0.0, -1.0] {
        let sp = build_line(*width, point(1.0, 2.0), point(3.0, 4.0));
        assert_eq!(
            sp.points,
            vec![
                PathPoint::corner(point(1.0, 2.0)),
                PathPoint::corner(point(3.0, 4.0)),
            ]
        );
        assert!(!sp.closed);
    }
}

#[test]
fn line_band() {
    let p0 = point(10.0, 20.0);
    let p1 = point(110.0, 20.0);
    let sp = build_line(4.0, p0, p1);

    assert_eq!(sp.points.len(), 4);
    assert!(!sp.closed);
    assert!(sp.points.iter().all(|p| p.kind == PathPointKind::Corner));

    // t = normalize(p0.y - p1.y, p1.x - p0.x) * 2 = (0, 2).
    assert_eq!(sp.points[0].anchor, point(10.0, 22.0));
    assert_eq!(sp.points[1].anchor, point(110.0, 22.0));
    assert_eq!(sp.points[2].anchor, point(110.0, 18.0));
    assert_eq!(sp.points[3].anchor, point(10.0, 18.0));
}

#[test]
fn line_band_width_and_parallel_edges() {
    let segments = [
        (point(0.0, 0.0), point(30.0, 40.0)),
        (point(-5.0, 7.0), point(-5.0, -100.0)),
        (point(1.5, -2.5), point(-8.0, 3.25)),
    ];

    for &(p0, p1) in &segments {
        for &w in &[0.5, 1.0, 7.25] {
            let sp = build_line(w, p0, p1);
            let a = sp.points[0].anchor;
            let b = sp.points[1].anchor;
            let c = sp.points[2].anchor;
            let d = sp.points[3].anchor;

            assert!(fuzzy_eq_f64((a - d).length(), w, 1e-9));
            assert!(fuzzy_eq_f64((b - c).length(), w, 1e-9));

            let dir = p1 - p0;
            assert!(fuzzy_eq_f64((b - a).cross(dir), 0.0, 1e-9));
            assert!(fuzzy_eq_f64((c - d).cross(dir), 0.0, 1e-9));
        }
    }
}

#[test]
fn closed_bands_option() {
    let stroke = StrokeBuilder::new(StrokeOptions::line_width(1.0).with_close_bands(true));
    assert!(stroke.build_line(point(0.0, 0.0), point(1.0, 0.0)).closed);

    // Two point sub-paths stay open.
    let thin = StrokeBuilder::new(StrokeOptions::DEFAULT.with_close_bands(true));
    assert!(!thin.build_line(point(0.0, 0.0), point(1.0, 0.0)).closed);
}

#[test]
fn zero_width_curve() {
    let p0 = point(0.0, 0.0);
    let k0 = point(0.0, 5.0);
    let k1 = point(5.0, 10.0);
    let p1 = point(10.0, 10.0);
    let sp = build_curve(0.0, p0, k0, k1, p1);

    assert_eq!(sp.points.len(), 2);
    assert!(!sp.closed);
    assert_eq!(sp.points[0], PathPoint::smooth(p0, p0, k0));
    assert_eq!(sp.points[1], PathPoint::smooth(k1, p1, p1));
    assert_eq!(sp.points[0].outgoing(), k0);
    assert_eq!(sp.points[1].incoming(), k1);
}

#[test]
fn curve_band() {
    let p0 = point(-10.0, 0.0);
    let k0 = point(-10.0, 5.0);
    let k1 = point(-5.0, 10.0);
    let p1 = point(0.0, 10.0);
    let sp = build_curve(2.0, p0, k0, k1, p1);

    assert_eq!(sp.points.len(), 4);
    assert!(!sp.closed);
    assert!(sp.points.iter().all(|p| p.kind == PathPointKind::Smooth));

    // Handle k0 - p0 points down, handle p1 - k1 points right.
    let t0 = vector(-1.0, 0.0);
    let t1 = vector(0.0, 1.0);

    assert_eq!(sp.points[0], PathPoint::smooth(p0 + t0, p0 + t0, k0 + t0));
    assert_eq!(sp.points[1], PathPoint::smooth(k1 + t1, p1 + t1, p1 + t1));
    assert_eq!(sp.points[2], PathPoint::smooth(p1 - t1, p1 - t1, k1 - t1));
    assert_eq!(sp.points[3], PathPoint::smooth(k0 - t0, p0 - t0, p0 - t0));

    // Offset bands are exactly `width` wide at both ends.
    assert!(fuzzy_eq_f64((sp.points[0].anchor - sp.points[3].anchor).length(), 2.0, 1e-12));
    assert!(fuzzy_eq_f64((sp.points[1].anchor - sp.points[2].anchor).length(), 2.0, 1e-12));
}

#[test]
fn degenerate_band_is_not_finite() {
    let p = point(3.0, 3.0);
    let line = build_line(2.0, p, p);
    assert_eq!(line.points.len(), 4);
    assert!(line.points.iter().all(|q| !q.anchor.x.is_finite()));

    let curve = build_curve(2.0, p, p, point(5.0, 3.0), point(8.0, 3.0));
    assert_eq!(curve.points.len(), 4);
    assert!(!curve.points[0].anchor.x.is_finite());

    // Thin strokes do not need a direction.
    assert_eq!(build_line(0.0, p, p).points[0].anchor, p);
}
