use crate::error::{check_count, check_dimension, check_finite, ParameterError};
use crate::{degrees, GridBuilder, GridGenerator};
use pgrid_path::geom::CubicBezierSegment;
use pgrid_path::math::{point, Angle, Point};

use std::f64::consts::PI;

/// Nested parabolas sharing their apex at the origin.
///
/// Parabola `i` goes through the point of the circle of radius `radius` at
/// angle `i·π/(2·(num_lines + 1))`. Each one is drawn as four arcs mirrored
/// across both axes, and a horizontal line of length `2·radius` is added
/// after all of them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct Parabolas {
    pub num_lines: u32,
    pub radius: f64,
    /// In degrees.
    pub angle: f64,
    pub line_width: f64,
}

impl Default for Parabolas {
    fn default() -> Self {
        Parabolas {
            num_lines: 16,
            radius: 300.0,
            angle: 0.0,
            line_width: 0.0,
        }
    }
}

impl Parabolas {
    /// The arc of parabola `i` (starting at 1) going from the circle to the apex.
    ///
    /// The tangent of a parabola at `p` crosses the horizontal axis at `p.x / 2`.
    /// Both handles sit halfway between their end point and that crossing.
    pub fn arc(&self, i: u32) -> CubicBezierSegment<f64> {
        let step = PI / (2.0 * (self.num_lines + 1) as f64);
        let a = step * i as f64;
        let apex = point(0.0, 0.0);
        let p0 = point(-a.cos() * self.radius, a.sin() * self.radius);
        let k0 = point(p0.x / 2.0, 0.0);

        CubicBezierSegment {
            from: p0,
            ctrl1: mid(p0, k0),
            ctrl2: mid(apex, k0),
            to: apex,
        }
    }
}

#[inline]
fn mid(a: Point, b: Point) -> Point {
    a.lerp(b, 0.5)
}

impl GridGenerator for Parabolas {
    const TITLE: &'static str = "Parabolas";

    fn angle(&self) -> Angle {
        degrees(self.angle)
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn sub_path_count(&self) -> Option<u64> {
        (self.num_lines as u64).checked_mul(4)?.checked_add(1)
    }

    fn validate(&self) -> Result<(), ParameterError> {
        check_count("num_lines", self.num_lines)?;
        check_dimension("radius", self.radius)?;
        check_finite("angle", self.angle)?;
        check_finite("line_width", self.line_width)
    }

    fn build(&self, builder: &mut GridBuilder) {
        for i in 1..=self.num_lines {
            let left = self.arc(i);
            let right = left.flip().scaled(-1.0, 1.0);

            builder.cubic(&left);
            builder.cubic(&right);
            builder.cubic(&left.scaled(1.0, -1.0));
            builder.cubic(&right.scaled(1.0, -1.0));
        }

        builder.line(point(-self.radius, 0.0), point(self.radius, 0.0));
    }
}

#[cfg(test)]
use crate::generate;
#[cfg(test)]
use pgrid_path::math::size;

#[test]
fn arcs_meet_at_the_apex() {
    let grid = Parabolas {
        num_lines: 3,
        radius: 100.0,
        ..Parabolas::default()
    };

    let paths = generate(&grid, size(400.0, 400.0)).unwrap();
    assert_eq!(paths.title, "Parabolas");
    assert_eq!(paths.len(), 13);

    let apex = point(200.0, 200.0);
    for i in 0..3 {
        let arcs = &paths.sub_paths[i * 4..i * 4 + 4];
        assert_eq!(arcs[0].points[1].anchor, apex);
        assert_eq!(arcs[1].points[0].anchor, apex);
        assert_eq!(arcs[2].points[1].anchor, apex);
        assert_eq!(arcs[3].points[0].anchor, apex);

        // The four outer ends lie on the circle.
        for p in &[
            arcs[0].points[0].anchor,
            arcs[1].points[1].anchor,
            arcs[2].points[0].anchor,
            arcs[3].points[1].anchor,
        ] {
            assert!(((*p - apex).length() - 100.0).abs() < 1e-9);
        }
    }

    let axis = &paths.sub_paths[12];
    assert_eq!(axis.points[0].anchor, point(100.0, 200.0));
    assert_eq!(axis.points[1].anchor, point(300.0, 200.0));
}

#[test]
fn tangent_crosses_the_axis_at_half_x() {
    let grid = Parabolas::default();
    for i in 1..=grid.num_lines {
        let arc = grid.arc(i);
        // The start handle points towards (p0.x / 2, 0).
        let dir = arc.ctrl1 - arc.from;
        let t = -arc.from.y / dir.y;
        assert!((arc.from.x + dir.x * t - arc.from.x / 2.0).abs() < 1e-9);
        // The apex handle lies on the axis, so the curve is tangent to it.
        assert_eq!(arc.ctrl2.y, 0.0);
        assert_eq!(arc.ctrl2.x, arc.from.x / 4.0);
    }
}
