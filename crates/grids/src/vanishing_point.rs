use crate::error::{check_count, check_dimension, check_finite, ParameterError};
use crate::{degrees, GridBuilder, GridGenerator};
use pgrid_path::math::{point, Angle, Point};

use std::f64::consts::PI;

/// A fan of spokes radiating from a vanishing point.
///
/// `num_spokes` spokes of length `radius·num_rings` are evenly spread around
/// the origin. Past the first ring, the gaps between spokes are filled with
/// shorter ticks that start at the ring and double in number with each ring,
/// keeping the density of lines roughly constant as they move away from the
/// center.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct VanishingPoint {
    pub num_spokes: u32,
    pub num_rings: u32,
    pub radius: f64,
    /// In degrees.
    pub angle: f64,
    pub line_width: f64,
}

impl Default for VanishingPoint {
    fn default() -> Self {
        VanishingPoint {
            num_spokes: 120,
            num_rings: 3,
            radius: 200.0,
            angle: 0.0,
            line_width: 0.0,
        }
    }
}

/// Point at distance `r` from the origin in direction `angle`, counter-clockwise
/// on screen.
#[inline]
fn polar(r: f64, angle: f64) -> Point {
    point(r * angle.cos(), -r * angle.sin())
}

impl GridGenerator for VanishingPoint {
    const TITLE: &'static str = "Vanishing Point";

    fn angle(&self) -> Angle {
        degrees(self.angle)
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn sub_path_count(&self) -> Option<u64> {
        // One spoke plus 1 + 2 + ... + 2^(rings-2) ticks per sector.
        let per_sector = 1u64.checked_shl(self.num_rings.checked_sub(1)?)?;
        (self.num_spokes as u64).checked_mul(per_sector)
    }

    fn validate(&self) -> Result<(), ParameterError> {
        check_count("num_spokes", self.num_spokes)?;
        check_count("num_rings", self.num_rings)?;
        check_dimension("radius", self.radius)?;
        check_finite("angle", self.angle)?;
        check_finite("line_width", self.line_width)
    }

    fn build(&self, builder: &mut GridBuilder) {
        let outer_radius = self.radius * self.num_rings as f64;
        let sector = 2.0 * PI / self.num_spokes as f64;

        for spoke in 0..self.num_spokes {
            let spoke_angle = spoke as f64 * sector;
            builder.line(point(0.0, 0.0), polar(outer_radius, spoke_angle));

            for ring in 1..self.num_rings {
                let inner_radius = self.radius * ring as f64;
                let num_ticks = 1u32 << (ring - 1);
                for k in 0..num_ticks {
                    let tick_angle =
                        spoke_angle + sector * (2 * k + 1) as f64 / (2 * num_ticks) as f64;
                    builder.line(
                        polar(inner_radius, tick_angle),
                        polar(outer_radius, tick_angle),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
use crate::generate;
#[cfg(test)]
use pgrid_path::math::size;

#[test]
fn spokes_only() {
    let grid = VanishingPoint {
        num_spokes: 8,
        num_rings: 1,
        radius: 100.0,
        ..VanishingPoint::default()
    };

    let paths = generate(&grid, size(400.0, 400.0)).unwrap();
    assert_eq!(paths.title, "Vanishing Point");
    assert_eq!(paths.len(), 8);

    for (i, sub_path) in paths.iter().enumerate() {
        let a = i as f64 * PI / 4.0;
        let from = sub_path.points[0].anchor;
        let to = sub_path.points[1].anchor;
        assert_eq!(from, point(200.0, 200.0));
        assert!((to.x - (200.0 + 100.0 * a.cos())).abs() < 1e-9);
        assert!((to.y - (200.0 - 100.0 * a.sin())).abs() < 1e-9);
    }

    // The second spoke points up and to the right on screen.
    let p = paths.sub_paths[1].points[1].anchor;
    assert!(p.x > 200.0 && p.y < 200.0);
}

#[test]
fn ticks_follow_their_spoke() {
    let grid = VanishingPoint {
        num_spokes: 4,
        num_rings: 3,
        radius: 10.0,
        ..VanishingPoint::default()
    };
    assert_eq!(grid.sub_path_count(), Some(16));

    let paths = generate(&grid, size(100.0, 100.0)).unwrap();
    assert_eq!(paths.len(), 16);

    let length = |i: usize| {
        let sp = &paths.sub_paths[i];
        (sp.points[1].anchor - sp.points[0].anchor).length()
    };

    // Spoke, one tick from ring 1, two ticks from ring 2, for each sector.
    for sector in 0..4 {
        let first = sector * 4;
        assert!((length(first) - 30.0).abs() < 1e-9);
        assert!((length(first + 1) - 20.0).abs() < 1e-9);
        assert!((length(first + 2) - 10.0).abs() < 1e-9);
        assert!((length(first + 3) - 10.0).abs() < 1e-9);
    }

    // The ring 1 tick bisects the first sector.
    let tick = paths.sub_paths[1].points[1].anchor;
    let expected = polar(30.0, PI / 4.0) + pgrid_path::math::vector(50.0, 50.0);
    assert!((tick - expected).length() < 1e-9);
}

#[test]
fn count_overflow() {
    let grid = VanishingPoint {
        num_spokes: u32::MAX,
        num_rings: 200,
        ..VanishingPoint::default()
    };
    assert_eq!(grid.sub_path_count(), None);
    assert!(matches!(
        generate(&grid, size(100.0, 100.0)),
        Err(ParameterError::TooManySubPaths { .. })
    ));
}
