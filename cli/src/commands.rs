use perspective_grids::grids::Grid;
use perspective_grids::math::Size;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
    PathData,
}

pub struct GenerateCmd {
    pub grid: Grid,
    pub canvas: Size,
    pub resolution: f64,
    pub close_bands: bool,
    pub format: OutputFormat,
    pub count: bool,
    /// Written only once the grid is generated. Standard output if `None`.
    pub output: Option<PathBuf>,
}
