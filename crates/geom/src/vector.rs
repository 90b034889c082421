//! Pure transformations of points and vectors.
//!
//! Euclid already provides `length`, `normalize` and the arithmetic operators.
//! This module adds the non-uniform scale, component-wise translation and
//! rotation about the origin used when laying out grids.

use crate::scalar::Scalar;
use crate::{point, vector, Angle, Point, Rotation, Vector};

/// Scale, translate and rotate operations returning a new value.
///
/// Implemented for both [`Point`] and [`Vector`].
///
/// ```
/// use pgrid_geom::{point, Angle, Vector2Ops};
///
/// let p = point(1.0f64, 0.0)
///     .scaled(2.0, 1.0)
///     .rotated(Angle::frac_pi_2())
///     .translated(10.0, 10.0);
///
/// assert!((p.x - 10.0).abs() < 1e-12);
/// assert!((p.y - 12.0).abs() < 1e-12);
/// ```
pub trait Vector2Ops<S>: Copy {
    /// Multiplies the x and y components by `sx` and `sy`.
    fn scaled(self, sx: S, sy: S) -> Self;

    /// Adds `tx` and `ty` to the x and y components.
    fn translated(self, tx: S, ty: S) -> Self;

    /// Rotates about the origin.
    ///
    /// `x' = x·cos(a) − y·sin(a)`, `y' = x·sin(a) + y·cos(a)`.
    fn rotated(self, angle: Angle<S>) -> Self;
}

impl<S: Scalar> Vector2Ops<S> for Point<S> {
    #[inline]
    fn scaled(self, sx: S, sy: S) -> Self {
        point(self.x * sx, self.y * sy)
    }

    #[inline]
    fn translated(self, tx: S, ty: S) -> Self {
        point(self.x + tx, self.y + ty)
    }

    #[inline]
    fn rotated(self, angle: Angle<S>) -> Self {
        Rotation::new(angle).transform_point(self)
    }
}

impl<S: Scalar> Vector2Ops<S> for Vector<S> {
    #[inline]
    fn scaled(self, sx: S, sy: S) -> Self {
        vector(self.x * sx, self.y * sy)
    }

    #[inline]
    fn translated(self, tx: S, ty: S) -> Self {
        vector(self.x + tx, self.y + ty)
    }

    #[inline]
    fn rotated(self, angle: Angle<S>) -> Self {
        Rotation::new(angle).transform_vector(self)
    }
}

/// Returns the vector rotated by a quarter turn, `(-y, x)`.
///
/// For a segment going from `a` to `b` this is `(a.y - b.y, b.x - a.x)`.
#[inline]
pub fn left_perpendicular<S: Scalar>(v: Vector<S>) -> Vector<S> {
    vector(-v.y, v.x)
}

#[cfg(test)]
fn fuzzy_eq(a: Point<f64>, b: Point<f64>, epsilon: f64) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}

#[test]
fn rotate_round_trip() {
    let points: [Point<f64>; 4] = [
        point(1.0, 0.0),
        point(-3.5, 12.0),
        point(250.0, -0.125),
        point(1e-3, 1e3),
    ];

    for i in 0..64 {
        let a = Angle::radians(i as f64 * 0.37 - 10.0);
        for p in &points {
            let back = p.rotated(a).rotated(-a);
            assert!(fuzzy_eq(back, *p, 1e-9), "{p:?} -> {back:?}");
        }
    }
}

#[test]
fn rotate_quarter_turn() {
    let p = point(2.0f64, 1.0).rotated(Angle::frac_pi_2());
    assert!(fuzzy_eq(p, point(-1.0, 2.0), 1e-12));

    let v = vector(2.0f64, 1.0).rotated(Angle::frac_pi_2());
    assert!((v.x + 1.0).abs() < 1e-12);
    assert!((v.y - 2.0).abs() < 1e-12);
}

#[test]
fn scale_and_translate() {
    let p = point(3.0f64, -4.0);
    assert_eq!(p.scaled(2.0, 0.5), point(6.0, -2.0));
    assert_eq!(p.translated(-3.0, 4.0), point(0.0, 0.0));
    assert_eq!(p.to_vector().length(), 5.0);

    // The original value is left untouched.
    assert_eq!(p, point(3.0, -4.0));
}

#[test]
fn normalized_length() {
    let v = vector(3.0f64, -4.0).normalize();
    assert!((v.length() - 1.0).abs() < 1e-12);

    let n = left_perpendicular(vector(10.0f64, 0.0));
    assert_eq!(n, vector(0.0, 10.0));
}
