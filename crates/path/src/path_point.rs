use crate::math::Point;

/// The two kinds of path vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathPointKind {
    /// No curvature entering or leaving the point.
    Corner,
    /// Independent incoming and outgoing bézier handles.
    Smooth,
}

/// A vertex of a sub-path with its two direction handles.
///
/// `left_direction` is the control point of the curve arriving at the anchor and
/// `right_direction` the control point of the curve leaving it. For corner points
/// both handles sit on the anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathPoint {
    pub kind: PathPointKind,
    pub anchor: Point,
    pub left_direction: Point,
    pub right_direction: Point,
}

impl PathPoint {
    /// A corner point at `at`.
    #[inline]
    pub fn corner(at: Point) -> Self {
        PathPoint {
            kind: PathPointKind::Corner,
            anchor: at,
            left_direction: at,
            right_direction: at,
        }
    }

    /// A smooth point, arguments in path order: incoming handle, anchor, outgoing handle.
    #[inline]
    pub fn smooth(left_direction: Point, anchor: Point, right_direction: Point) -> Self {
        PathPoint {
            kind: PathPointKind::Smooth,
            anchor,
            left_direction,
            right_direction,
        }
    }

    #[inline]
    pub fn is_corner(&self) -> bool {
        self.kind == PathPointKind::Corner
    }

    /// Control point of the segment arriving at this point.
    #[inline]
    pub fn incoming(&self) -> Point {
        self.left_direction
    }

    /// Control point of the segment leaving this point.
    #[inline]
    pub fn outgoing(&self) -> Point {
        self.right_direction
    }

    /// Applies `f` to the anchor and both handles.
    pub fn map<F: Fn(Point) -> Point>(&self, f: F) -> Self {
        PathPoint {
            kind: self.kind,
            anchor: f(self.anchor),
            left_direction: f(self.left_direction),
            right_direction: f(self.right_direction),
        }
    }
}

#[test]
fn corner_handles_on_anchor() {
    use crate::math::point;

    let p = PathPoint::corner(point(3.0, 4.0));
    assert!(p.is_corner());
    assert_eq!(p.incoming(), p.anchor);
    assert_eq!(p.outgoing(), p.anchor);

    let s = PathPoint::smooth(point(0.0, 1.0), point(1.0, 1.0), point(2.0, 1.0));
    assert!(!s.is_corner());
    assert_eq!(s.incoming(), point(0.0, 1.0));
    assert_eq!(s.outgoing(), point(2.0, 1.0));

    let moved = s.map(|p| point(p.x + 1.0, p.y));
    assert_eq!(moved.anchor, point(2.0, 1.0));
    assert_eq!(moved.kind, PathPointKind::Smooth);
}
