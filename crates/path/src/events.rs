use crate::geom::{CubicBezierSegment, LineSegment};
use crate::math::Point;

/// A drawable piece of a sub-path between two consecutive points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathSegment {
    Line(LineSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
}

impl PathSegment {
    pub fn from(&self) -> Point {
        match self {
            PathSegment::Line(segment) => segment.from,
            PathSegment::Cubic(segment) => segment.from,
        }
    }

    pub fn to(&self) -> Point {
        match self {
            PathSegment::Line(segment) => segment.to,
            PathSegment::Cubic(segment) => segment.to,
        }
    }

    pub fn is_line(&self) -> bool {
        match self {
            PathSegment::Line(..) => true,
            PathSegment::Cubic(..) => false,
        }
    }
}
