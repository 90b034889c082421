use crate::math::Box2D;
use crate::SubPath;

/// The complete ordered collection of sub-paths produced by one generator call.
///
/// Sub-paths are kept in the order they were pushed, which is also their
/// paint order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathSet {
    pub title: String,
    pub sub_paths: Vec<SubPath>,
}

impl PathSet {
    pub fn new<T: Into<String>>(title: T) -> Self {
        PathSet {
            title: title.into(),
            sub_paths: Vec::new(),
        }
    }

    pub fn with_capacity<T: Into<String>>(title: T, capacity: usize) -> Self {
        PathSet {
            title: title.into(),
            sub_paths: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, sub_path: SubPath) {
        self.sub_paths.push(sub_path);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sub_paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sub_paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<SubPath> {
        self.sub_paths.iter()
    }

    /// Total number of path points across all sub-paths.
    pub fn num_points(&self) -> usize {
        self.sub_paths.iter().map(SubPath::len).sum()
    }

    /// Smallest rectangle containing every sub-path, `None` if there are no points.
    pub fn bounding_box(&self) -> Option<Box2D> {
        let mut boxes = self.sub_paths.iter().filter_map(SubPath::bounding_box);
        let mut result = boxes.next()?;
        // Thin strokes have zero-area boxes, which `Box2D::union` would skip.
        for b in boxes {
            result.min = result.min.min(b.min);
            result.max = result.max.max(b.max);
        }

        Some(result)
    }
}

impl<'l> IntoIterator for &'l PathSet {
    type Item = &'l SubPath;
    type IntoIter = std::slice::Iter<'l, SubPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.sub_paths.iter()
    }
}

impl IntoIterator for PathSet {
    type Item = SubPath;
    type IntoIter = std::vec::IntoIter<SubPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.sub_paths.into_iter()
    }
}

impl Extend<SubPath> for PathSet {
    fn extend<I: IntoIterator<Item = SubPath>>(&mut self, iter: I) {
        self.sub_paths.extend(iter);
    }
}

#[test]
fn path_set_basics() {
    use crate::math::point;
    use crate::build_line;

    let mut paths = PathSet::new("Lines");
    assert!(paths.is_empty());
    assert!(paths.bounding_box().is_none());

    paths.push(build_line(0.0, point(0.0, 0.0), point(10.0, 0.0)));
    paths.extend(Some(build_line(2.0, point(0.0, 5.0), point(10.0, 5.0))));

    assert_eq!(paths.title, "Lines");
    assert_eq!(paths.len(), 2);
    assert_eq!(paths.num_points(), 6);

    let b = paths.bounding_box().unwrap();
    assert_eq!(b.min, point(0.0, 0.0));
    assert_eq!(b.max, point(10.0, 6.0));
}
