use perspective_grids::grids::ParameterError;
use perspective_grids::svg::SinkError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("Invalid value {value:?} for {name}.")]
    InvalidArgument { name: String, value: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
