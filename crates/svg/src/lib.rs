#![deny(bare_trait_objects)]

//! # Perspective grids SVG
//!
//! Utilities to hand generated path sets over to a host document and to
//! write that document out as SVG.
//!
//! - [`serializer`] turns sub-paths into SVG path data (`M`, `L`, `C`, `Z`).
//! - [`Document`] is a minimal raster document with a pixel size, a resolution
//!   and a list of named path items.
//! - [`HostSink`] is the boundary the grids are handed to. Implementations add
//!   the paths at the reference resolution of 72 units per inch so that grid
//!   coordinates map 1:1 onto document pixels whatever the stored resolution.
//!
//! ```
//! use pgrid_path::{build_line, PathSet};
//! use pgrid_path::math::point;
//! use pgrid_svg::{Document, DocumentHost, HostSink};
//!
//! let mut paths = PathSet::new("Guides");
//! paths.push(build_line(0.0, point(10.0, 10.0), point(90.0, 10.0)));
//!
//! let mut host = DocumentHost::new();
//! host.open(Document::new(100.0, 100.0, 300.0).unwrap());
//! host.create_path_layer("Guides", &paths).unwrap();
//!
//! let svg = host.active_document().unwrap().to_svg();
//! assert!(svg.contains(r#"d="M 10 10 L 90 10""#));
//! ```

mod document;
mod error;
pub mod serializer;
mod sink;

pub use crate::document::{Document, PathItem, REFERENCE_RESOLUTION};
pub use crate::error::SinkError;
pub use crate::serializer::{path_data, path_set_data, PathSerializer};
pub use crate::sink::{DocumentHost, HostSink};
