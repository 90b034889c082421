use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::vector::{left_perpendicular, Vector2Ops};
use crate::{Point, Vector};

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
///
/// `ctrl1` is the handle leaving `from` and `ctrl2` the handle arriving at `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Vector from `from` to the first control point.
    #[inline]
    pub fn start_tangent(&self) -> Vector<S> {
        self.ctrl1 - self.from
    }

    /// Vector from the second control point to `to`.
    #[inline]
    pub fn end_tangent(&self) -> Vector<S> {
        self.to - self.ctrl2
    }

    /// Unit normal at `from`, perpendicular to `ctrl1 - from`.
    ///
    /// The first control point must not coincide with `from`.
    #[inline]
    pub fn start_normal(&self) -> Vector<S> {
        left_perpendicular(self.start_tangent()).normalize()
    }

    /// Unit normal at `to`, perpendicular to `to - ctrl2`.
    ///
    /// The second control point must not coincide with `to`.
    #[inline]
    pub fn end_normal(&self) -> Vector<S> {
        left_perpendicular(self.end_tangent()).normalize()
    }

    /// Scales all four points, for example `scaled(1.0, -1.0)` mirrors the
    /// curve across the x axis.
    #[inline]
    pub fn scaled(&self, sx: S, sy: S) -> Self {
        CubicBezierSegment {
            from: self.from.scaled(sx, sy),
            ctrl1: self.ctrl1.scaled(sx, sy),
            ctrl2: self.ctrl2.scaled(sx, sy),
            to: self.to.scaled(sx, sy),
        }
    }

    #[inline]
    pub fn translate(&self, by: Vector<S>) -> Self {
        CubicBezierSegment {
            from: self.from + by,
            ctrl1: self.ctrl1 + by,
            ctrl2: self.ctrl2 + by,
            to: self.to + by,
        }
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }
}

impl Segment for CubicBezierSegment<f64> {
    impl_segment!(f64);
}

#[cfg(test)]
use crate::{point, vector};

#[test]
fn end_normals() {
    let c: CubicBezierSegment<f64> = CubicBezierSegment {
        from: point(-10.0, 0.0),
        ctrl1: point(-10.0, 5.0),
        ctrl2: point(-5.0, 10.0),
        to: point(0.0, 10.0),
    };

    let n0 = c.start_normal();
    let n1 = c.end_normal();
    assert!((n0.length() - 1.0).abs() < 1e-12);
    assert!((n1.length() - 1.0).abs() < 1e-12);
    assert!(n0.dot(c.start_tangent()).abs() < 1e-12);
    assert!(n1.dot(c.end_tangent()).abs() < 1e-12);

    // Leaving upward, arriving rightward.
    assert_eq!(n0, vector(-1.0, 0.0));
    assert_eq!(n1, vector(0.0, 1.0));
}

#[test]
fn mirror_and_flip() {
    let c: CubicBezierSegment<f64> = CubicBezierSegment {
        from: point(1.0, 2.0),
        ctrl1: point(3.0, 4.0),
        ctrl2: point(5.0, 6.0),
        to: point(7.0, 8.0),
    };

    let m = c.scaled(1.0, -1.0);
    assert_eq!(m.ctrl1, point(3.0, -4.0));
    assert_eq!(m.scaled(1.0, -1.0), c);

    let f = c.flip();
    assert_eq!(f.from, c.to);
    assert_eq!(f.ctrl1, c.ctrl2);
    assert_eq!(f.flip(), c);

    let t = c.translate(vector(-1.0, 2.0));
    assert_eq!(t.from, point(0.0, 4.0));
    assert_eq!(t.to, point(6.0, 10.0));
}
