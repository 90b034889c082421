use crate::iterator::Segments;
use crate::math::{Box2D, Point};
use crate::PathPoint;

/// How a sub-path combines with the ones before it.
///
/// Grids only ever add shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ShapeOperation {
    Add,
}

impl Default for ShapeOperation {
    fn default() -> Self {
        ShapeOperation::Add
    }
}

/// One contiguous sequence of path points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SubPath {
    pub operation: ShapeOperation,
    pub closed: bool,
    pub points: Vec<PathPoint>,
}

impl SubPath {
    pub fn new(points: Vec<PathPoint>, closed: bool) -> Self {
        SubPath {
            operation: ShapeOperation::Add,
            closed,
            points,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the line and cubic segments joining consecutive points.
    pub fn segments(&self) -> Segments {
        Segments::new(&self.points, self.closed)
    }

    /// Applies `f` to every anchor and handle.
    pub fn map_points<F: Fn(Point) -> Point>(&self, f: F) -> Self {
        SubPath {
            operation: self.operation,
            closed: self.closed,
            points: self.points.iter().map(|p| p.map(&f)).collect(),
        }
    }

    /// Smallest rectangle containing all anchors and handles, `None` if empty.
    pub fn bounding_box(&self) -> Option<Box2D> {
        let first = self.points.first()?;
        let mut b = Box2D::new(first.anchor, first.anchor);
        for p in self.points.iter() {
            for q in &[p.anchor, p.left_direction, p.right_direction] {
                b.min = b.min.min(*q);
                b.max = b.max.max(*q);
            }
        }

        Some(b)
    }
}

#[test]
fn bounding_box_includes_handles() {
    use crate::math::point;

    let sp = SubPath::new(
        vec![
            PathPoint::smooth(point(0.0, 0.0), point(0.0, 0.0), point(0.0, 8.0)),
            PathPoint::smooth(point(6.0, 10.0), point(10.0, 10.0), point(10.0, 10.0)),
        ],
        false,
    );

    let b = sp.bounding_box().unwrap();
    assert_eq!(b.min, point(0.0, 0.0));
    assert_eq!(b.max, point(10.0, 10.0));
    assert_eq!(sp.operation, ShapeOperation::Add);
    assert!(SubPath::new(Vec::new(), false).bounding_box().is_none());
}
