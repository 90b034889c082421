use thiserror::Error;

/// Failures at the host boundary.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SinkError {
    #[error("No document is open.")]
    NoActiveDocument,
    #[error("Invalid document resolution {0}.")]
    InvalidResolution(f64),
    #[error("Invalid document size {width}x{height}.")]
    InvalidSize { width: f64, height: f64 },
}
