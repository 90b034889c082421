//! Iteration over the segments of a sub-path.
//!
//! A sub-path stores points with direction handles. Two consecutive points are
//! joined by a straight line when the outgoing handle of the first one and the
//! incoming handle of the second one both sit on their anchors, and by a cubic
//! bézier curve otherwise.
//!
//! ```
//! use pgrid_path::{build_curve, PathSegment};
//! use pgrid_path::math::point;
//!
//! let band = build_curve(
//!     2.0,
//!     point(0.0, 0.0),
//!     point(0.0, 5.0),
//!     point(5.0, 10.0),
//!     point(10.0, 10.0),
//! );
//!
//! let kinds: Vec<bool> = band.segments().map(|s| s.is_line()).collect();
//! // Outer curve, end cap, inner curve. The band is not closed.
//! assert_eq!(kinds, vec![false, true, false]);
//! ```

use crate::events::PathSegment;
use crate::geom::{CubicBezierSegment, LineSegment};
use crate::PathPoint;

/// An iterator of `PathSegment` over the points of a sub-path.
#[derive(Clone)]
pub struct Segments<'l> {
    points: std::slice::Iter<'l, PathPoint>,
    prev: Option<&'l PathPoint>,
    first: Option<&'l PathPoint>,
    closed: bool,
}

impl<'l> Segments<'l> {
    pub fn new(points: &'l [PathPoint], closed: bool) -> Self {
        let mut points = points.iter();
        let first = points.next();
        Segments {
            points,
            prev: first,
            first,
            closed,
        }
    }
}

/// The segment joining two consecutive path points.
pub fn segment_between(from: &PathPoint, to: &PathPoint) -> PathSegment {
    if from.outgoing() == from.anchor && to.incoming() == to.anchor {
        PathSegment::Line(LineSegment {
            from: from.anchor,
            to: to.anchor,
        })
    } else {
        PathSegment::Cubic(CubicBezierSegment {
            from: from.anchor,
            ctrl1: from.outgoing(),
            ctrl2: to.incoming(),
            to: to.anchor,
        })
    }
}

impl<'l> Iterator for Segments<'l> {
    type Item = PathSegment;
    fn next(&mut self) -> Option<PathSegment> {
        match (self.prev, self.points.next()) {
            (Some(from), Some(to)) => {
                self.prev = Some(to);
                Some(segment_between(from, to))
            }
            (Some(last), None) => {
                self.prev = None;
                match self.first {
                    Some(first) if self.closed && !std::ptr::eq(first, last) => {
                        Some(segment_between(last, first))
                    }
                    _ => None,
                }
            }
            (None, _) => None,
        }
    }
}

#[cfg(test)]
use crate::{math::point, SubPath};

#[test]
fn open_polyline() {
    let sp = SubPath::new(
        vec![
            PathPoint::corner(point(0.0, 0.0)),
            PathPoint::corner(point(1.0, 0.0)),
            PathPoint::corner(point(1.0, 1.0)),
        ],
        false,
    );

    let segments: Vec<PathSegment> = sp.segments().collect();
    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(PathSegment::is_line));
    assert_eq!(segments[1].to(), point(1.0, 1.0));
}

#[test]
fn closed_polyline() {
    let sp = SubPath::new(
        vec![
            PathPoint::corner(point(0.0, 0.0)),
            PathPoint::corner(point(1.0, 0.0)),
            PathPoint::corner(point(1.0, 1.0)),
        ],
        true,
    );

    let segments: Vec<PathSegment> = sp.segments().collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[2].from(), point(1.0, 1.0));
    assert_eq!(segments[2].to(), point(0.0, 0.0));
}

#[test]
fn single_point_and_empty() {
    let single = SubPath::new(vec![PathPoint::corner(point(2.0, 2.0))], true);
    assert_eq!(single.segments().count(), 0);

    let empty = SubPath::new(Vec::new(), true);
    assert_eq!(empty.segments().count(), 0);
}

#[test]
fn smooth_points_make_curves() {
    let sp = SubPath::new(
        vec![
            PathPoint::smooth(point(0.0, 0.0), point(0.0, 0.0), point(0.0, 5.0)),
            PathPoint::smooth(point(5.0, 10.0), point(10.0, 10.0), point(10.0, 10.0)),
        ],
        false,
    );

    let segments: Vec<PathSegment> = sp.segments().collect();
    assert_eq!(
        segments,
        vec![PathSegment::Cubic(CubicBezierSegment {
            from: point(0.0, 0.0),
            ctrl1: point(0.0, 5.0),
            ctrl2: point(5.0, 10.0),
            to: point(10.0, 10.0),
        })]
    );
}
