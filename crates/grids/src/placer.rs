use pgrid_path::geom::Vector2Ops;
use pgrid_path::math::{point, Angle, Point, Size};

/// Places grid geometry built around the origin onto the canvas.
///
/// Points are rotated about the origin by the grid angle, then translated to
/// the canvas center. The whole grid moves as a rigid body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerspectivePlacer {
    angle: Angle,
    center: Point,
}

impl PerspectivePlacer {
    pub fn new(angle: Angle, center: Point) -> Self {
        PerspectivePlacer { angle, center }
    }

    /// Centers the grid on a canvas of the given size.
    pub fn for_canvas(angle: Angle, canvas: Size) -> Self {
        Self::new(angle, point(canvas.width / 2.0, canvas.height / 2.0))
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn place(&self, p: Point) -> Point {
        p.rotated(self.angle).translated(self.center.x, self.center.y)
    }
}

/// Rotates `p` about the origin by `angle_radians` then translates it by `(center_x, center_y)`.
pub fn place(p: Point, angle_radians: f64, center_x: f64, center_y: f64) -> Point {
    PerspectivePlacer::new(Angle::radians(angle_radians), point(center_x, center_y)).place(p)
}

/// Converts an angle entered in degrees, `deg·2π/360`.
pub fn degrees(deg: f64) -> Angle {
    Angle::radians(deg * 2.0 * std::f64::consts::PI / 360.0)
}

#[cfg(test)]
use pgrid_path::math::size;

#[test]
fn centered_on_canvas() {
    let placer = PerspectivePlacer::for_canvas(Angle::zero(), size(200.0, 100.0));
    assert_eq!(placer.center(), point(100.0, 50.0));
    assert_eq!(placer.place(point(-5.0, 10.0)), point(95.0, 60.0));
}

#[test]
fn rotate_then_translate() {
    let p = place(point(10.0, 0.0), std::f64::consts::FRAC_PI_2, 100.0, 100.0);
    assert!((p.x - 100.0).abs() < 1e-12);
    assert!((p.y - 110.0).abs() < 1e-12);

    let placer = PerspectivePlacer::new(degrees(180.0), point(0.0, 0.0));
    let q = placer.place(point(3.0, 4.0));
    assert!((q.x + 3.0).abs() < 1e-12);
    assert!((q.y + 4.0).abs() < 1e-12);
}

#[test]
fn degrees_to_radians() {
    assert_eq!(degrees(0.0).radians, 0.0);
    assert!((degrees(90.0).radians - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    assert!((degrees(-360.0).radians + 2.0 * std::f64::consts::PI).abs() < 1e-15);
}
