use crate::error::{check_count, check_dimension, check_finite, ParameterError};
use crate::{degrees, GridBuilder, GridGenerator};
use pgrid_path::geom::CubicBezierSegment;
use pgrid_path::math::{point, Angle};

/// Handle length of a cubic bézier quarter arc, relative to the radius.
pub const ELLIPSE_HANDLE_RATIO: f64 = 0.551784;

/// Concentric ellipses sharing the same horizontal diameter.
///
/// Every ellipse goes through `(-length/2, 0)` and `(length/2, 0)`. Their
/// vertical semi-axes are evenly spaced up to `height`. Each ellipse is made
/// of four quarter arcs, the top two first, followed by the diameter line
/// once all ellipses are built.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct Ellipses {
    pub num_lines: u32,
    pub length: f64,
    pub height: f64,
    /// In degrees.
    pub angle: f64,
    pub line_width: f64,
}

impl Default for Ellipses {
    fn default() -> Self {
        Ellipses {
            num_lines: 20,
            length: 600.0,
            height: 300.0,
            angle: 0.0,
            line_width: 0.0,
        }
    }
}

impl Ellipses {
    /// The quarter arc going from the left end of the diameter to the bottom
    /// of ellipse `i` (y down).
    pub fn quarter_arc(&self, i: u32) -> CubicBezierSegment<f64> {
        let half_length = self.length / 2.0;
        let y = self.height * (i + 1) as f64 / self.num_lines as f64;
        let kh = y * ELLIPSE_HANDLE_RATIO;
        let kw = half_length * ELLIPSE_HANDLE_RATIO;

        CubicBezierSegment {
            from: point(-half_length, 0.0),
            ctrl1: point(-half_length, kh),
            ctrl2: point(-kw, y),
            to: point(0.0, y),
        }
    }
}

impl GridGenerator for Ellipses {
    const TITLE: &'static str = "Ellipses";

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
        check_dimension("length", self.length)?;
        check_dimension("height", self.height)?;
        check_finite("angle", self.angle)?;
        check_finite("line_width", self.line_width)
    }

    fn build(&self, builder: &mut GridBuilder) {
        for i in 0..self.num_lines {
            let left = self.quarter_arc(i);
            let right = left.flip().scaled(-1.0, 1.0);

            builder.cubic(&left);
            builder.cubic(&right);
            builder.cubic(&left.scaled(1.0, -1.0));
            builder.cubic(&right.scaled(1.0, -1.0));
        }

        let half_length = self.length / 2.0;
        builder.line(point(-half_length, 0.0), point(half_length, 0.0));
    }
}

#[cfg(test)]
use crate::{generate, PerspectivePlacer};
#[cfg(test)]
use pgrid_path::math::size;
#[cfg(test)]
use pgrid_path::{PathSet, PathPointKind, StrokeBuilder, StrokeOptions};

#[cfg(test)]
fn build_local(grid: &Ellipses) -> PathSet {
    let placer = PerspectivePlacer::new(Angle::zero(), point(0.0, 0.0));
    let stroke = StrokeBuilder::new(StrokeOptions::DEFAULT);
    let mut paths = PathSet::new(Ellipses::TITLE);
    grid.build(&mut GridBuilder::new(&placer, &stroke, &mut paths));
    paths
}

#[test]
fn handle_offsets() {
    let grid = Ellipses {
        num_lines: 4,
        length: 200.0,
        height: 80.0,
        ..Ellipses::default()
    };

    let paths = build_local(&grid);
    assert_eq!(paths.len(), 17);

    for i in 0..4 {
        let y = 20.0 * (i + 1) as f64;
        let top_left = &paths.sub_paths[i * 4];
        let top_right = &paths.sub_paths[i * 4 + 1];

        // Arc from (-100, 0) to (0, y).
        let start = &top_left.points[0];
        let end = &top_left.points[1];
        assert_eq!(start.anchor, point(-100.0, 0.0));
        assert_eq!(start.right_direction, point(-100.0, y * ELLIPSE_HANDLE_RATIO));
        assert_eq!(end.anchor, point(0.0, y));
        assert_eq!(end.left_direction, point(-100.0 * ELLIPSE_HANDLE_RATIO, y));

        // Arc from (0, y) to (100, 0).
        assert_eq!(top_right.points[0].anchor, point(0.0, y));
        assert_eq!(
            top_right.points[0].right_direction,
            point(100.0 * ELLIPSE_HANDLE_RATIO, y)
        );
        assert_eq!(top_right.points[1].anchor, point(100.0, 0.0));
        assert_eq!(
            top_right.points[1].left_direction,
            point(100.0, y * ELLIPSE_HANDLE_RATIO)
        );

        // The bottom half mirrors the top half.
        for (top, bottom) in [(i * 4, i * 4 + 2), (i * 4 + 1, i * 4 + 3)].iter() {
            let top = &paths.sub_paths[*top];
            let bottom = &paths.sub_paths[*bottom];
            assert_eq!(top.points.len(), bottom.points.len());
            for (a, b) in top.points.iter().zip(bottom.points.iter()) {
                assert_eq!(a.anchor, point(b.anchor.x, -b.anchor.y));
                assert_eq!(
                    a.right_direction,
                    point(b.right_direction.x, -b.right_direction.y)
                );
            }
        }
    }

    let diameter = &paths.sub_paths[16];
    assert!(diameter.points.iter().all(|p| p.kind == PathPointKind::Corner));
    assert_eq!(diameter.points[0].anchor, point(-100.0, 0.0));
    assert_eq!(diameter.points[1].anchor, point(100.0, 0.0));
}

#[test]
fn arcs_stay_inside_the_box() {
    let grid = Ellipses::default();
    let paths = generate(&grid, size(1000.0, 1000.0)).unwrap();
    let bounds = paths.bounding_box().unwrap();
    assert!(bounds.min.x >= 200.0 - 1e-9 && bounds.max.x <= 800.0 + 1e-9);
    assert!(bounds.min.y >= 200.0 - 1e-9 && bounds.max.y <= 800.0 + 1e-9);
}
