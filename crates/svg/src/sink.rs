use crate::document::{Document, REFERENCE_RESOLUTION};
use crate::error::SinkError;

use pgrid_path::PathSet;

/// Where generated grids end up.
///
/// Grid coordinates are unit agnostic. Implementations must make them map
/// 1:1 onto the created path whatever the resolution of the target.
pub trait HostSink {
    fn create_path_layer(&mut self, title: &str, paths: &PathSet) -> Result<(), SinkError>;
}

/// Normalizes the resolution to 72, adds the path item and restores the
/// previous resolution.
impl HostSink for Document {
    fn create_path_layer(&mut self, title: &str, paths: &PathSet) -> Result<(), SinkError> {
        let resolution = self.resolution();
        if resolution != REFERENCE_RESOLUTION {
            log::debug!(
                "{}: document at {} dpi, adding paths at {} dpi",
                title,
                resolution,
                REFERENCE_RESOLUTION
            );
        }

        self.resize_image(REFERENCE_RESOLUTION)?;
        self.add_path_item(title, paths);
        self.resize_image(resolution)
    }
}

/// Holds the active document, if any.
#[derive(Clone, Debug, Default)]
pub struct DocumentHost {
    active: Option<Document>,
}

impl DocumentHost {
    pub fn new() -> Self {
        DocumentHost { active: None }
    }

    /// Makes `document` the active document, returning the previous one.
    pub fn open(&mut self, document: Document) -> Option<Document> {
        self.active.replace(document)
    }

    pub fn close(&mut self) -> Option<Document> {
        self.active.take()
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.as_ref()
    }

    pub fn active_document_mut(&mut self) -> Option<&mut Document> {
        self.active.as_mut()
    }
}

impl HostSink for DocumentHost {
    fn create_path_layer(&mut self, title: &str, paths: &PathSet) -> Result<(), SinkError> {
        self.active
            .as_mut()
            .ok_or(SinkError::NoActiveDocument)?
            .create_path_layer(title, paths)
    }
}

#[cfg(test)]
use pgrid_path::build_line;
#[cfg(test)]
use pgrid_path::math::point;

#[test]
fn no_active_document() {
    let mut host = DocumentHost::new();
    let paths = PathSet::new("Empty");
    assert_eq!(
        host.create_path_layer("Empty", &paths),
        Err(SinkError::NoActiveDocument)
    );

    host.open(Document::new(10.0, 10.0, 72.0).unwrap());
    assert!(host.create_path_layer("Empty", &paths).is_ok());
    assert!(host.close().is_some());
    assert!(host.active_document().is_none());
}

#[test]
fn resolution_bracket() {
    let mut paths = PathSet::new("Line");
    paths.push(build_line(0.0, point(12.5, 40.0), point(87.5, 40.0)));

    for &dpi in &[72.0, 96.0, 150.0, 300.0] {
        let mut host = DocumentHost::new();
        host.open(Document::new(100.0, 80.0, dpi).unwrap());
        host.create_path_layer("Line", &paths).unwrap();

        let doc = host.active_document().unwrap();
        assert_eq!(doc.resolution(), dpi);
        assert_eq!(doc.items()[0].name, "Line");
        assert_eq!(doc.items()[0].sub_paths, paths.sub_paths);
    }
}
