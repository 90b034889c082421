use crate::error::{check_count, check_dimension, check_finite, ParameterError};
use crate::{degrees, GridBuilder, GridGenerator};
use pgrid_path::math::{point, Angle};

/// Evenly spaced parallel lines.
///
/// `num_lines` horizontal lines of length `line_length`, centered on the
/// y axis and spread over `[-span/2, span/2]`. A single line sits at y = 0.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct ParallelLines {
    pub num_lines: u32,
    pub span: f64,
    pub line_length: f64,
    /// In degrees.
    pub angle: f64,
    pub line_width: f64,
}

impl Default for ParallelLines {
    fn default() -> Self {
        ParallelLines {
            num_lines: 10,
            span: 300.0,
            line_length: 500.0,
            angle: 0.0,
            line_width: 0.0,
        }
    }
}

impl ParallelLines {
    /// Local y coordinate of line `i`.
    pub fn line_y(&self, i: u32) -> f64 {
        if self.num_lines == 1 {
            return 0.0;
        }

        let spacing = self.span / (self.num_lines - 1) as f64;
        -self.span / 2.0 + i as f64 * spacing
    }
}

impl GridGenerator for ParallelLines {
    const TITLE: &'static str = "Parallel Lines";

    fn angle(&self) -> Angle {
        degrees(self.angle)
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn sub_path_count(&self) -> Option<u64> {
        Some(self.num_lines as u64)
    }

    fn validate(&self) -> Result<(), ParameterError> {
        check_count("num_lines", self.num_lines)?;
        check_dimension("span", self.span)?;
        check_dimension("line_length", self.line_length)?;
        check_finite("angle", self.angle)?;
        check_finite("line_width", self.line_width)
    }

    fn build(&self, builder: &mut GridBuilder) {
        let x0 = -self.line_length / 2.0;
        let x1 = self.line_length / 2.0;

        for i in 0..self.num_lines {
            let y = self.line_y(i);
            builder.line(point(x0, y), point(x1, y));
        }
    }
}

#[cfg(test)]
use crate::generate;
#[cfg(test)]
use pgrid_path::math::size;
#[cfg(test)]
use pgrid_path::{PathPoint, PathPointKind};

#[test]
fn evenly_spaced_and_symmetric() {
    for n in 2..20 {
        let grid = ParallelLines {
            num_lines: n,
            span: 250.0,
            ..ParallelLines::default()
        };

        let spacing = 250.0 / (n - 1) as f64;
        for i in 0..n {
            let y = grid.line_y(i);
            let mirrored = grid.line_y(n - 1 - i);
            assert!((y + mirrored).abs() < 1e-9);
            if i > 0 {
                assert!((y - grid.line_y(i - 1) - spacing).abs() < 1e-9);
            }
        }
        assert!((grid.line_y(0) + 125.0).abs() < 1e-9);
        assert!((grid.line_y(n - 1) - 125.0).abs() < 1e-9);
    }
}

#[test]
fn single_line() {
    let grid = ParallelLines {
        num_lines: 1,
        span: 300.0,
        line_length: 20.0,
        ..ParallelLines::default()
    };

    let paths = generate(&grid, size(100.0, 100.0)).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths.sub_paths[0].points,
        vec![
            PathPoint::corner(point(40.0, 50.0)),
            PathPoint::corner(point(60.0, 50.0)),
        ]
    );
}

#[test]
fn three_lines_on_canvas() {
    let grid = ParallelLines {
        num_lines: 3,
        span: 100.0,
        line_length: 10.0,
        angle: 0.0,
        line_width: 0.0,
    };

    let paths = generate(&grid, size(200.0, 200.0)).unwrap();
    assert_eq!(paths.title, "Parallel Lines");
    assert_eq!(paths.len(), 3);

    for (sub_path, y) in paths.iter().zip([-50.0, 0.0, 50.0].iter()) {
        assert!(!sub_path.closed);
        assert_eq!(sub_path.points.len(), 2);
        assert!(sub_path.points.iter().all(|p| p.kind == PathPointKind::Corner));
        assert_eq!(sub_path.points[0].anchor, point(95.0, y + 100.0));
        assert_eq!(sub_path.points[1].anchor, point(105.0, y + 100.0));
    }

    let b = paths.bounding_box().unwrap();
    assert_eq!(b.min, point(95.0, 50.0));
    assert_eq!(b.max, point(105.0, 150.0));
}

#[test]
fn rotated_quarter_turn() {
    let grid = ParallelLines {
        num_lines: 2,
        span: 10.0,
        line_length: 4.0,
        angle: 90.0,
        line_width: 0.0,
    };

    let paths = generate(&grid, size(100.0, 100.0)).unwrap();
    // Local (-2, -5) rotates to (5, -2).
    let p = paths.sub_paths[0].points[0].anchor;
    assert!((p.x - 55.0).abs() < 1e-9);
    assert!((p.y - 48.0).abs() < 1e-9);
}

#[test]
fn rejects_bad_input() {
    let zero = ParallelLines {
        num_lines: 0,
        ..ParallelLines::default()
    };
    assert!(matches!(
        zero.validate(),
        Err(ParameterError::NonPositiveCount { .. })
    ));

    let flat = ParallelLines {
        line_length: 0.0,
        ..ParallelLines::default()
    };
    assert_eq!(
        flat.validate(),
        Err(ParameterError::NonPositiveDimension {
            name: "line_length",
            value: 0.0
        })
    );
}
