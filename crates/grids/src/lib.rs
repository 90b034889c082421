#![deny(bare_trait_objects)]

//! Perspective construction grids.
//!
//! Each generator takes a handful of numeric parameters and produces a
//! [`PathSet`](pgrid_path::PathSet) of guide lines and curves:
//!
//! - [`ParallelLines`]: evenly spaced horizontal lines,
//! - [`DiminishingLines`]: lines converging towards a horizon line,
//! - [`VanishingPoint`]: a fan of spokes with ticks approximating rings,
//! - [`Ellipses`]: concentric half-ellipses above and below a diameter,
//! - [`Parabolas`]: nested parabolas sharing their apex.
//!
//! The geometry of each grid is built around the origin and then placed on
//! the canvas by a [`PerspectivePlacer`]: rotated by the grid angle and moved
//! to the canvas center.
//!
//! # Examples
//!
//! ```
//! use pgrid_grids::{generate, ParallelLines};
//! use pgrid_path::math::size;
//!
//! let grid = ParallelLines {
//!     num_lines: 3,
//!     span: 100.0,
//!     line_length: 10.0,
//!     ..ParallelLines::default()
//! };
//!
//! let paths = generate(&grid, size(200.0, 200.0)).unwrap();
//! assert_eq!(paths.title, "Parallel Lines");
//! assert_eq!(paths.len(), 3);
//! ```
//!
//! Parameters are validated by [`generate`] before anything is built. Use
//! [`build_path_set`] to skip validation when the input is known to be sane.

pub use pgrid_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

mod diminishing;
mod ellipses;
mod error;
mod parabolas;
mod parallel;
mod placer;
mod vanishing_point;

pub use crate::diminishing::DiminishingLines;
pub use crate::ellipses::{Ellipses, ELLIPSE_HANDLE_RATIO};
pub use crate::error::ParameterError;
pub use crate::parabolas::Parabolas;
pub use crate::parallel::ParallelLines;
pub use crate::placer::{degrees, place, PerspectivePlacer};
pub use crate::vanishing_point::VanishingPoint;

use pgrid_path::math::{Angle, Point, Size};
use pgrid_path::{PathSet, StrokeBuilder, StrokeOptions};

/// Upper bound on the number of sub-paths a single grid may contain.
pub const MAX_SUB_PATHS: u64 = 1 << 22;

/// Options that do not belong to any specific grid.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GridOptions {
    /// Mark four point stroke bands as closed. Off by default.
    pub close_bands: bool,
}

/// Receives the primitives of a grid in local coordinates, places them on
/// the canvas and strokes them into the output path set.
pub struct GridBuilder<'l> {
    placer: &'l PerspectivePlacer,
    stroke: &'l StrokeBuilder,
    output: &'l mut PathSet,
}

impl<'l> GridBuilder<'l> {
    pub fn new(
        placer: &'l PerspectivePlacer,
        stroke: &'l StrokeBuilder,
        output: &'l mut PathSet,
    ) -> Self {
        GridBuilder {
            placer,
            stroke,
            output,
        }
    }

    /// Adds the straight segment `p0 -> p1`.
    pub fn line(&mut self, p0: Point, p1: Point) {
        let sub_path = self
            .stroke
            .build_line(self.placer.place(p0), self.placer.place(p1));
        self.output.push(sub_path);
    }

    /// Adds the cubic bézier curve `p0 -> k0 -> k1 -> p1`.
    pub fn curve(&mut self, p0: Point, k0: Point, k1: Point, p1: Point) {
        let sub_path = self.stroke.build_curve(
            self.placer.place(p0),
            self.placer.place(k0),
            self.placer.place(k1),
            self.placer.place(p1),
        );
        self.output.push(sub_path);
    }

    pub fn cubic(&mut self, curve: &pgrid_path::geom::CubicBezierSegment<f64>) {
        self.curve(curve.from, curve.ctrl1, curve.ctrl2, curve.to);
    }
}

/// Common interface of the grid generators.
pub trait GridGenerator {
    /// Title given to the generated path set.
    const TITLE: &'static str;

    /// Rotation of the grid on the canvas.
    fn angle(&self) -> Angle;

    /// Stroke width forwarded to the stroke builder.
    fn line_width(&self) -> f64;

    /// Number of sub-paths `build` will produce, `None` if it overflows.
    fn sub_path_count(&self) -> Option<u64>;

    /// Checks the parameters.
    fn validate(&self) -> Result<(), ParameterError>;

    /// Emits the grid primitives in local coordinates, in paint order.
    fn build(&self, builder: &mut GridBuilder);
}

/// Validates the canvas and the parameters, then builds the grid.
pub fn generate<G: GridGenerator>(grid: &G, canvas: Size) -> Result<PathSet, ParameterError> {
    generate_with(grid, canvas, &GridOptions::default())
}

/// Same as `generate` with extra options.
pub fn generate_with<G: GridGenerator>(
    grid: &G,
    canvas: Size,
    options: &GridOptions,
) -> Result<PathSet, ParameterError> {
    check_canvas(canvas)?;
    grid.validate()?;
    match grid.sub_path_count() {
        Some(n) if n <= MAX_SUB_PATHS => {}
        _ => {
            return Err(ParameterError::TooManySubPaths {
                limit: MAX_SUB_PATHS,
            })
        }
    }

    Ok(build_path_set(grid, canvas, options))
}

/// Builds the grid without validating anything.
///
/// Degenerate parameters may produce non-finite coordinates.
pub fn build_path_set<G: GridGenerator>(grid: &G, canvas: Size, options: &GridOptions) -> PathSet {
    let placer = PerspectivePlacer::for_canvas(grid.angle(), canvas);
    let stroke = StrokeBuilder::new(
        StrokeOptions::line_width(grid.line_width()).with_close_bands(options.close_bands),
    );

    let capacity = grid.sub_path_count().unwrap_or(0).min(MAX_SUB_PATHS) as usize;
    let mut output = PathSet::with_capacity(G::TITLE, capacity);
    grid.build(&mut GridBuilder::new(&placer, &stroke, &mut output));

    log::debug!(
        "{}: {} sub-paths, {} points, angle {:?}, line width {}",
        G::TITLE,
        output.len(),
        output.num_points(),
        grid.angle(),
        grid.line_width(),
    );

    output
}

fn check_canvas(canvas: Size) -> Result<(), ParameterError> {
    let valid = canvas.width.is_finite()
        && canvas.height.is_finite()
        && canvas.width > 0.0
        && canvas.height > 0.0;
    if !valid {
        return Err(ParameterError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }

    Ok(())
}

/// One of the five grids, for callers choosing the grid at run time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(tag = "grid", rename_all = "snake_case"))]
pub enum Grid {
    ParallelLines(ParallelLines),
    DiminishingLines(DiminishingLines),
    VanishingPoint(VanishingPoint),
    Ellipses(Ellipses),
    Parabolas(Parabolas),
}

impl Grid {
    pub fn title(&self) -> &'static str {
        match self {
            Grid::ParallelLines(..) => ParallelLines::TITLE,
            Grid::DiminishingLines(..) => DiminishingLines::TITLE,
            Grid::VanishingPoint(..) => VanishingPoint::TITLE,
            Grid::Ellipses(..) => Ellipses::TITLE,
            Grid::Parabolas(..) => Parabolas::TITLE,
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        match self {
            Grid::ParallelLines(grid) => grid.validate(),
            Grid::DiminishingLines(grid) => grid.validate(),
            Grid::VanishingPoint(grid) => grid.validate(),
            Grid::Ellipses(grid) => grid.validate(),
            Grid::Parabolas(grid) => grid.validate(),
        }
    }

    pub fn generate(&self, canvas: Size, options: &GridOptions) -> Result<PathSet, ParameterError> {
        match self {
            Grid::ParallelLines(grid) => generate_with(grid, canvas, options),
            Grid::DiminishingLines(grid) => generate_with(grid, canvas, options),
            Grid::VanishingPoint(grid) => generate_with(grid, canvas, options),
            Grid::Ellipses(grid) => generate_with(grid, canvas, options),
            Grid::Parabolas(grid) => generate_with(grid, canvas, options),
        }
    }
}

#[cfg(test)]
use pgrid_path::math::size;

#[test]
fn invalid_canvas() {
    let grid = ParallelLines::default();
    assert_eq!(
        generate(&grid, size(0.0, 100.0)),
        Err(ParameterError::InvalidCanvas {
            width: 0.0,
            height: 100.0
        })
    );
    assert!(generate(&grid, size(100.0, f64::INFINITY)).is_err());
}

#[test]
fn too_many_sub_paths() {
    let grid = VanishingPoint {
        num_spokes: 120,
        num_rings: 40,
        ..VanishingPoint::default()
    };
    assert_eq!(
        generate(&grid, size(100.0, 100.0)),
        Err(ParameterError::TooManySubPaths {
            limit: MAX_SUB_PATHS
        })
    );
}

#[test]
fn defaults_generate() {
    let canvas = size(1024.0, 768.0);
    let grids = [
        Grid::ParallelLines(ParallelLines::default()),
        Grid::DiminishingLines(DiminishingLines::default()),
        Grid::VanishingPoint(VanishingPoint::default()),
        Grid::Ellipses(Ellipses::default()),
        Grid::Parabolas(Parabolas::default()),
    ];

    let titles = [
        "Parallel Lines",
        "Persp Parallel Lines",
        "Vanishing Point",
        "Ellipses",
        "Parabolas",
    ];

    for (grid, title) in grids.iter().zip(titles.iter()) {
        let paths = grid.generate(canvas, &GridOptions::default()).unwrap();
        assert_eq!(paths.title, *title);
        assert_eq!(grid.title(), *title);
        assert!(!paths.is_empty());
        for sub_path in &paths {
            assert!(!sub_path.closed);
            for p in &sub_path.points {
                assert!(p.anchor.x.is_finite() && p.anchor.y.is_finite());
            }
        }
    }
}

#[test]
fn close_bands_option() {
    let grid = Ellipses {
        line_width: 2.0,
        ..Ellipses::default()
    };
    let options = GridOptions { close_bands: true };
    let paths = generate_with(&grid, size(800.0, 600.0), &options).unwrap();
    assert!(paths.iter().all(|sp| sp.closed && sp.points.len() == 4));
}

#[test]
fn unvalidated_degenerate_input() {
    let grid = ParallelLines {
        num_lines: 3,
        line_length: 0.0,
        line_width: 2.0,
        ..ParallelLines::default()
    };
    assert!(generate(&grid, size(200.0, 200.0)).is_err());

    let paths = build_path_set(&grid, size(200.0, 200.0), &GridOptions::default());
    assert_eq!(paths.len(), 3);
    for sub_path in &paths {
        assert_eq!(sub_path.points.len(), 4);
        assert!(sub_path.points.iter().all(|p| !p.anchor.x.is_finite()));
    }
}
