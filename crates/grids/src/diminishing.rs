use crate::error::{check_count, check_dimension, check_finite, ParameterError};
use crate::{degrees, GridBuilder, GridGenerator};
use pgrid_path::math::{point, Angle};

/// Parallel lines converging towards a horizon line at y = 0.
///
/// Line `i` sits at `span·ratio/(ratio + i)`, so the first line is at
/// `span` and the following ones get closer to each other as they approach
/// the horizon. The horizon itself is always added last.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct DiminishingLines {
    pub num_lines: u32,
    pub span: f64,
    pub ratio: f64,
    pub line_length: f64,
    /// In degrees.
    pub angle: f64,
    /// Also emit each line reflected on the other side of the horizon.
    pub mirror: bool,
    pub line_width: f64,
}

impl Default for DiminishingLines {
    fn default() -> Self {
        DiminishingLines {
            num_lines: 10,
            span: 200.0,
            ratio: 1.0,
            line_length: 500.0,
            angle: 0.0,
            mirror: false,
            line_width: 0.0,
        }
    }
}

impl DiminishingLines {
    /// Local y coordinate of line `i`, before mirroring.
    #[inline]
    pub fn line_y(&self, i: u32) -> f64 {
        self.span * (self.ratio / (self.ratio + i as f64))
    }
}

impl GridGenerator for DiminishingLines {
    const TITLE: &'static str = "Persp Parallel Lines";

    fn angle(&self) -> Angle {
        degrees(self.angle)
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn sub_path_count(&self) -> Option<u64> {
        let per_line = if self.mirror { 2 } else { 1 };
        (self.num_lines as u64).checked_mul(per_line)?.checked_add(1)
    }

    fn validate(&self) -> Result<(), ParameterError> {
        check_count("num_lines", self.num_lines)?;
        check_dimension("span", self.span)?;
        check_finite("ratio", self.ratio)?;
        if self.ratio <= 0.0 {
            return Err(ParameterError::DegenerateRatio { ratio: self.ratio });
        }
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
            if self.mirror {
                builder.line(point(x0, -y), point(x1, -y));
            }
        }

        // Horizon.
        builder.line(point(x0, 0.0), point(x1, 0.0));
    }
}

#[cfg(test)]
use crate::{build_path_set, generate, GridOptions, PerspectivePlacer};
#[cfg(test)]
use pgrid_path::math::size;
#[cfg(test)]
use pgrid_path::{PathSet, StrokeBuilder, StrokeOptions};

#[test]
fn strictly_decreasing() {
    for &ratio in &[0.25, 1.0, 3.0, 17.5] {
        let grid = DiminishingLines {
            num_lines: 30,
            ratio,
            ..DiminishingLines::default()
        };

        assert_eq!(grid.line_y(0), grid.span);
        for i in 1..grid.num_lines {
            let y = grid.line_y(i);
            assert!(y > 0.0);
            assert!(y < grid.line_y(i - 1));
        }
    }
}

#[test]
fn horizon_comes_last() {
    let grid = DiminishingLines {
        num_lines: 5,
        mirror: true,
        ..DiminishingLines::default()
    };

    let placer = PerspectivePlacer::new(Angle::zero(), point(0.0, 0.0));
    let stroke = StrokeBuilder::new(StrokeOptions::DEFAULT);
    let mut paths = PathSet::new(DiminishingLines::TITLE);
    grid.build(&mut GridBuilder::new(&placer, &stroke, &mut paths));

    assert_eq!(paths.len(), 11);
    assert_eq!(grid.sub_path_count(), Some(11));

    let ys: Vec<f64> = paths.iter().map(|sp| sp.points[0].anchor.y).collect();
    for i in 0..5 {
        let y = grid.line_y(i);
        assert_eq!(ys[2 * i as usize], y);
        assert_eq!(ys[2 * i as usize + 1], -y);
    }
    assert_eq!(*ys.last().unwrap(), 0.0);
}

#[test]
fn single_line_and_horizon() {
    let grid = DiminishingLines {
        num_lines: 1,
        span: 100.0,
        ratio: 1.0,
        line_length: 10.0,
        ..DiminishingLines::default()
    };

    let paths = generate(&grid, size(300.0, 300.0)).unwrap();
    assert_eq!(paths.title, "Persp Parallel Lines");
    assert_eq!(paths.len(), 2);
    assert_eq!(paths.sub_paths[0].points[0].anchor, point(145.0, 250.0));
    assert_eq!(paths.sub_paths[0].points[1].anchor, point(155.0, 250.0));
    assert_eq!(paths.sub_paths[1].points[0].anchor, point(145.0, 150.0));
    assert_eq!(paths.sub_paths[1].points[1].anchor, point(155.0, 150.0));
}

#[test]
fn zero_ratio() {
    let grid = DiminishingLines {
        ratio: 0.0,
        ..DiminishingLines::default()
    };
    assert_eq!(
        generate(&grid, size(300.0, 300.0)),
        Err(ParameterError::DegenerateRatio { ratio: 0.0 })
    );

    // Unchecked, the first line is 0/0.
    let paths = build_path_set(&grid, size(300.0, 300.0), &GridOptions::default());
    assert!(paths.sub_paths[0].points[0].anchor.y.is_nan());
}
