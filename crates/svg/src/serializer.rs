//! SVG path data output.
//!
//! No effort is put into making the output compact. Coordinates are printed
//! with the shortest representation that round-trips.

use pgrid_path::math::Point;
use pgrid_path::{PathSegment, PathSet, SubPath};

/// Builds a `String` representation of a path using the SVG syntax.
#[derive(Clone, Debug, Default)]
pub struct PathSerializer {
    path: String,
}

impl PathSerializer {
    pub fn new() -> Self {
        PathSerializer {
            path: String::new(),
        }
    }

    fn separate(&mut self) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
    }

    pub fn move_to(&mut self, to: Point) {
        self.separate();
        self.path += &format!("M {} {}", to.x, to.y);
    }

    pub fn line_to(&mut self, to: Point) {
        self.separate();
        self.path += &format!("L {} {}", to.x, to.y);
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.separate();
        self.path += &format!(
            "C {} {} {} {} {} {}",
            ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
        );
    }

    pub fn close(&mut self) {
        self.separate();
        self.path.push('Z');
    }

    /// Appends a sub-path, starting with a move to its first anchor.
    ///
    /// A closed sub-path ends with `Z`. When its closing segment is a straight
    /// line, the `Z` alone draws it.
    pub fn sub_path(&mut self, sub_path: &SubPath) {
        let first = match sub_path.points.first() {
            Some(p) => p.anchor,
            None => return,
        };

        self.move_to(first);

        let last = sub_path.points.len() - 1;
        for (i, segment) in sub_path.segments().enumerate() {
            let closing = sub_path.closed && i == last;
            match segment {
                PathSegment::Line(_) if closing => {}
                PathSegment::Line(line) => self.line_to(line.to),
                PathSegment::Cubic(curve) => {
                    self.cubic_bezier_to(curve.ctrl1, curve.ctrl2, curve.to)
                }
            }
        }

        if sub_path.closed {
            self.close();
        }
    }

    pub fn build(self) -> String {
        self.path
    }
}

/// SVG path data of a single sub-path.
pub fn path_data(sub_path: &SubPath) -> String {
    let mut serializer = PathSerializer::new();
    serializer.sub_path(sub_path);
    serializer.build()
}

/// SVG path data of all sub-paths of a set, in order.
pub fn path_set_data(paths: &PathSet) -> String {
    let mut serializer = PathSerializer::new();
    for sub_path in paths {
        serializer.sub_path(sub_path);
    }
    serializer.build()
}

#[cfg(test)]
use pgrid_path::math::point;
#[cfg(test)]
use pgrid_path::{build_curve, build_line, StrokeBuilder, StrokeOptions};

#[test]
fn thin_line() {
    let sub_path = build_line(0.0, point(1.0, 2.0), point(3.5, 2.0));
    assert_eq!(path_data(&sub_path), "M 1 2 L 3.5 2");
}

#[test]
fn thin_curve() {
    let sub_path = build_curve(
        0.0,
        point(0.0, 0.0),
        point(0.0, 5.0),
        point(5.0, 10.0),
        point(10.0, 10.0),
    );
    assert_eq!(path_data(&sub_path), "M 0 0 C 0 5 5 10 10 10");
}

#[test]
fn line_band() {
    let open = build_line(2.0, point(0.0, 0.0), point(10.0, 0.0));
    assert_eq!(path_data(&open), "M 0 1 L 10 1 L 10 -1 L 0 -1");

    let stroke = StrokeBuilder::new(StrokeOptions::line_width(2.0).with_close_bands(true));
    let closed = stroke.build_line(point(0.0, 0.0), point(10.0, 0.0));
    assert_eq!(path_data(&closed), "M 0 1 L 10 1 L 10 -1 L 0 -1 Z");
}

#[test]
fn path_set() {
    let mut paths = PathSet::new("Two");
    assert_eq!(path_set_data(&paths), "");

    paths.push(build_line(0.0, point(0.0, 0.0), point(1.0, 0.0)));
    paths.push(build_line(0.0, point(0.0, 1.0), point(1.0, 1.0)));
    assert_eq!(path_set_data(&paths), "M 0 0 L 1 0 M 0 1 L 1 1");
}
