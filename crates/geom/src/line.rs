use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::vector::left_perpendicular;
use crate::{Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Unit vector perpendicular to the segment, `(from.y - to.y, to.x - from.x)` normalized.
    ///
    /// The segment must not be degenerate, otherwise the result is not finite.
    #[inline]
    pub fn left_normal(&self) -> Vector<S> {
        left_perpendicular(self.to_vector()).normalize()
    }

    #[inline]
    pub fn start_normal(&self) -> Vector<S> {
        self.left_normal()
    }

    #[inline]
    pub fn end_normal(&self) -> Vector<S> {
        self.left_normal()
    }
}

impl Segment for LineSegment<f64> {
    impl_segment!(f64);
}

#[cfg(test)]
use crate::{point, vector};

#[cfg(test)]
fn fuzzy_eq_f64(a: f64, b: f64, epsilon: f64) -> bool {
    f64::abs(a - b) <= epsilon
}

#[test]
fn left_normal_is_unit_and_perpendicular() {
    let segments: [LineSegment<f64>; 3] = [
        LineSegment { from: point(0.0, 0.0), to: point(10.0, 0.0) },
        LineSegment { from: point(-3.0, 2.0), to: point(4.0, -7.0) },
        LineSegment { from: point(100.0, 100.0), to: point(100.0, 50.0) },
    ];

    for s in &segments {
        let n = s.left_normal();
        assert!(fuzzy_eq_f64(n.length(), 1.0, 1e-12));
        assert!(fuzzy_eq_f64(n.dot(s.to_vector()), 0.0, 1e-9));
        assert_eq!(s.start_normal(), n);
        assert_eq!(s.end_normal(), n);
    }

    // Horizontal segment going right: (0 - 0, 10 - 0) normalized.
    assert_eq!(segments[0].left_normal(), vector(0.0, 1.0));
}

#[test]
fn degenerate_normal_is_not_finite() {
    let s: LineSegment<f64> = LineSegment { from: point(3.0, 3.0), to: point(3.0, 3.0) };
    assert_eq!(s.to_vector(), vector(0.0, 0.0));
    assert!(!s.left_normal().x.is_finite());
    assert!(!s.left_normal().y.is_finite());
}
