#![deny(bare_trait_objects)]

//! Perspective construction grids as vector paths.
//!
//! # Crates
//!
//! This meta-crate (`perspective_grids`) reexports the following sub-crates for convenience:
//!
//! * **pgrid_grids** - The five grid generators and the perspective placer.
//! * **pgrid_path** - Path points, sub-paths, path sets and the stroke builder.
//! * **pgrid_geom** - Vector operations, line and cubic bézier segments.
//! * **pgrid_svg** - Host document model and SVG output.
//!
//! Each `pgrid_<name>` crate is reexported as a `<name>` module in `perspective_grids`. For example:
//!
//! ```ignore
//! extern crate pgrid_grids;
//! use pgrid_grids::VanishingPoint;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate perspective_grids;
//! use perspective_grids::grids::VanishingPoint;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! When using the main crate `perspective_grids`, `pgrid_svg` is disabled by default.
//! It can be added with the feature flag `svg`.
//!
//! # Examples
//!
//! ## Generating a grid
//!
//! ```
//! use perspective_grids::grids::{generate, VanishingPoint};
//! use perspective_grids::math::size;
//!
//! let grid = VanishingPoint {
//!     num_spokes: 12,
//!     num_rings: 2,
//!     ..VanishingPoint::default()
//! };
//!
//! let paths = generate(&grid, size(800.0, 600.0)).unwrap();
//! // Each spoke is followed by one tick.
//! assert_eq!(paths.len(), 24);
//!
//! for sub_path in &paths {
//!     for segment in sub_path.segments() {
//!         println!("{:?} -> {:?}", segment.from(), segment.to());
//!     }
//! }
//! ```
//!
//! ## Stroking by hand
//!
//! ```
//! use perspective_grids::path::{PathSet, StrokeBuilder, StrokeOptions};
//! use perspective_grids::math::point;
//!
//! let stroke = StrokeBuilder::new(StrokeOptions::line_width(1.5));
//! let mut paths = PathSet::new("Horizon");
//! paths.push(stroke.build_line(point(0.0, 300.0), point(800.0, 300.0)));
//!
//! assert_eq!(paths.num_points(), 4);
//! ```

pub extern crate pgrid_grids;
#[cfg(feature = "svg")]
pub extern crate pgrid_svg;

pub use pgrid_grids as grids;
#[cfg(feature = "svg")]
pub use pgrid_svg as svg;
pub use grids::path;
pub use path::geom;

pub use path::math;
