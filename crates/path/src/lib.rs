#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Data structures to describe the vector paths of a perspective grid.
//!
//! A [`PathSet`] is an ordered list of [`SubPath`]s, each of which is an ordered
//! list of [`PathPoint`]s. The [`StrokeBuilder`] turns a line or cubic bézier
//! segment into a sub-path, widening it into a band when a line width is set.
//!
//! This crate is reexported in [perspective_grids](https://docs.rs/perspective_grids/).
//!
//! # Examples
//!
//! ```
//! use pgrid_path::{PathSet, StrokeBuilder, StrokeOptions};
//! use pgrid_path::math::point;
//!
//! let stroke = StrokeBuilder::new(StrokeOptions::line_width(2.0));
//!
//! let mut paths = PathSet::new("Example");
//! paths.push(stroke.build_line(point(0.0, 0.0), point(10.0, 0.0)));
//! paths.push(stroke.build_curve(
//!     point(0.0, 0.0),
//!     point(0.0, 5.0),
//!     point(5.0, 10.0),
//!     point(10.0, 10.0),
//! ));
//!
//! for sub_path in &paths {
//!     assert_eq!(sub_path.points.len(), 4);
//!     for segment in sub_path.segments() {
//!         println!("{:?}", segment);
//!     }
//! }
//! ```

pub use pgrid_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod events;
pub mod iterator;
mod path_point;
mod path_set;
pub mod stroke;
mod sub_path;

pub use crate::events::PathSegment;
#[doc(inline)]
pub use crate::iterator::Segments;
pub use crate::path_point::{PathPoint, PathPointKind};
pub use crate::path_set::PathSet;
#[doc(inline)]
pub use crate::stroke::{build_curve, build_line, StrokeBuilder, StrokeOptions};
pub use crate::sub_path::{ShapeOperation, SubPath};

pub mod math {
    //! f64 version of the pgrid_geom types used everywhere. Most other pgrid
    //! crates reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Size2D<f64>```.
    pub type Size = euclid::default::Size2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```.
    pub type Box2D = euclid::default::Box2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(w, h)`.
    #[inline]
    pub fn size(w: f64, h: f64) -> Size {
        Size::new(w, h)
    }
}
