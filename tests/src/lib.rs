//! End to end scenarios across the perspective grid crates.

use perspective_grids::grids::{
    DiminishingLines, Ellipses, Grid, Parabolas, ParallelLines, VanishingPoint,
};
use perspective_grids::path::PathSet;

#[cfg(test)]
mod scenarios;

/// One grid of each kind, with default parameters.
pub fn default_grids() -> Vec<Grid> {
    vec![
        Grid::ParallelLines(ParallelLines::default()),
        Grid::DiminishingLines(DiminishingLines::default()),
        Grid::VanishingPoint(VanishingPoint::default()),
        Grid::Ellipses(Ellipses::default()),
        Grid::Parabolas(Parabolas::default()),
    ]
}

/// Same as `default_grids` with a rotation and a stroke width applied to each grid.
pub fn stroked_grids(angle: f64, line_width: f64) -> Vec<Grid> {
    default_grids()
        .into_iter()
        .map(|grid| match grid {
            Grid::ParallelLines(g) => Grid::ParallelLines(ParallelLines {
                angle,
                line_width,
                ..g
            }),
            Grid::DiminishingLines(g) => Grid::DiminishingLines(DiminishingLines {
                angle,
                line_width,
                ..g
            }),
            Grid::VanishingPoint(g) => Grid::VanishingPoint(VanishingPoint {
                angle,
                line_width,
                ..g
            }),
            Grid::Ellipses(g) => Grid::Ellipses(Ellipses {
                angle,
                line_width,
                ..g
            }),
            Grid::Parabolas(g) => Grid::Parabolas(Parabolas {
                angle,
                line_width,
                ..g
            }),
        })
        .collect()
}

/// Whether every anchor and handle of the set is a finite number.
pub fn all_finite(paths: &PathSet) -> bool {
    paths.iter().all(|sub_path| {
        sub_path.points.iter().all(|p| {
            [p.anchor, p.left_direction, p.right_direction]
                .iter()
                .all(|q| q.x.is_finite() && q.y.is_finite())
        })
    })
}

pub fn fuzzy_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}
