use crate::error::SinkError;
use crate::serializer::PathSerializer;

use pgrid_path::{PathSet, SubPath};

use std::fmt;

/// Resolution at which one document pixel is one point (1/72 inch).
pub const REFERENCE_RESOLUTION: f64 = 72.0;

/// A named group of sub-paths stored in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct PathItem {
    pub name: String,
    pub sub_paths: Vec<SubPath>,
}

impl PathItem {
    /// Whether any sub-path is a stroke band that must be filled rather than stroked.
    pub fn is_filled(&self) -> bool {
        self.sub_paths.iter().any(|sp| sp.len() > 2)
    }
}

/// A raster document: a pixel size, a resolution in pixels per inch and the
/// path items added to it.
///
/// Path items are specified in points and stored in pixels, so the resolution
/// at the time an item is added determines its scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    width: f64,
    height: f64,
    resolution: f64,
    items: Vec<PathItem>,
}

impl Document {
    pub fn new(width: f64, height: f64, resolution: f64) -> Result<Self, SinkError> {
        let valid_size = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !valid_size {
            return Err(SinkError::InvalidSize { width, height });
        }
        check_resolution(resolution)?;

        Ok(Document {
            width,
            height,
            resolution,
            items: Vec::new(),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn items(&self) -> &[PathItem] {
        &self.items
    }

    /// Changes the resolution without resampling: the pixel size is kept.
    pub fn resize_image(&mut self, resolution: f64) -> Result<(), SinkError> {
        check_resolution(resolution)?;
        self.resolution = resolution;

        Ok(())
    }

    /// Adds the sub-paths of `paths` as a new item, converting from points to
    /// pixels at the current resolution.
    pub fn add_path_item(&mut self, name: &str, paths: &PathSet) -> &PathItem {
        let scale = self.resolution / REFERENCE_RESOLUTION;
        let sub_paths = paths
            .iter()
            .map(|sp| sp.map_points(|p| p * scale))
            .collect();

        log::trace!(
            "{}: added {} sub-paths at {} dpi",
            name,
            paths.len(),
            self.resolution
        );

        self.items.push(PathItem {
            name: name.to_string(),
            sub_paths,
        });
        &self.items[self.items.len() - 1]
    }

    /// Writes the document as a standalone SVG file, one `<path>` per item.
    pub fn write_svg<W: fmt::Write>(&self, output: &mut W) -> fmt::Result {
        writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;

        for item in &self.items {
            let paint = if item.is_filled() {
                r#"fill="black" stroke="none""#
            } else {
                r#"fill="none" stroke="black""#
            };

            let mut data = PathSerializer::new();
            for sub_path in &item.sub_paths {
                data.sub_path(sub_path);
            }

            writeln!(
                output,
                r#"  <path id="{}" d="{}" {}/>"#,
                escape(&item.name),
                data.build(),
                paint,
            )?;
        }

        writeln!(output, "</svg>")
    }

    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        // Writing to a String can't fail.
        let _ = self.write_svg(&mut svg);
        svg
    }
}

fn check_resolution(resolution: f64) -> Result<(), SinkError> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(SinkError::InvalidResolution(resolution));
    }

    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
use pgrid_path::build_line;
#[cfg(test)]
use pgrid_path::math::point;

#[test]
fn invalid_documents() {
    assert_eq!(
        Document::new(0.0, 10.0, 72.0),
        Err(SinkError::InvalidSize {
            width: 0.0,
            height: 10.0
        })
    );
    assert_eq!(
        Document::new(10.0, 10.0, -1.0),
        Err(SinkError::InvalidResolution(-1.0))
    );

    let mut doc = Document::new(10.0, 10.0, 72.0).unwrap();
    assert!(doc.resize_image(f64::NAN).is_err());
    assert_eq!(doc.resolution(), 72.0);
}

#[test]
fn items_scale_with_resolution() {
    let mut paths = PathSet::new("Line");
    paths.push(build_line(0.0, point(10.0, 20.0), point(30.0, 20.0)));

    let mut doc = Document::new(100.0, 100.0, 144.0).unwrap();
    let item = doc.add_path_item("Line", &paths);
    assert_eq!(item.sub_paths[0].points[0].anchor, point(20.0, 40.0));
    assert_eq!(item.sub_paths[0].points[1].anchor, point(60.0, 40.0));

    doc.resize_image(72.0).unwrap();
    let item = doc.add_path_item("Line", &paths);
    assert_eq!(item.sub_paths[0].points[0].anchor, point(10.0, 20.0));
    assert_eq!(doc.items().len(), 2);
    // Resizing keeps the pixel size.
    assert_eq!((doc.width(), doc.height()), (100.0, 100.0));
}

#[test]
fn svg_output() {
    let mut thin = PathSet::new("Thin");
    thin.push(build_line(0.0, point(0.0, 5.0), point(10.0, 5.0)));
    let mut wide = PathSet::new("Wide");
    wide.push(build_line(2.0, point(0.0, 0.0), point(10.0, 0.0)));

    let mut doc = Document::new(64.0, 32.0, 72.0).unwrap();
    doc.add_path_item("Thin <1>", &thin);
    doc.add_path_item("Wide", &wide);

    let svg = doc.to_svg();
    let lines: Vec<&str> = svg.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="32" viewBox="0 0 64 32">"#,
            r#"  <path id="Thin &lt;1&gt;" d="M 0 5 L 10 5" fill="none" stroke="black"/>"#,
            r#"  <path id="Wide" d="M 0 1 L 10 1 L 10 -1 L 0 -1" fill="black" stroke="none"/>"#,
            "</svg>",
        ]
    );
}
