use crate::*;

use perspective_grids::geom::Vector2Ops;
use perspective_grids::grids::{
    generate, generate_with, DiminishingLines, Ellipses, Grid, GridGenerator, GridOptions,
    Parabolas, ParallelLines, ParameterError, VanishingPoint, ELLIPSE_HANDLE_RATIO,
};
use perspective_grids::math::{point, size, Angle};
use perspective_grids::path::{PathPointKind, PathSegment};
use perspective_grids::svg::{Document, DocumentHost, HostSink, SinkError};

#[test]
fn parallel_lines_on_a_small_canvas() {
    let grid = ParallelLines {
        num_lines: 3,
        span: 100.0,
        line_length: 10.0,
        angle: 0.0,
        line_width: 0.0,
    };

    let paths = generate(&grid, size(200.0, 200.0)).unwrap();
    assert_eq!(paths.len(), 3);

    for (sub_path, &y) in paths.iter().zip([-50.0, 0.0, 50.0].iter()) {
        assert!(!sub_path.closed);
        assert_eq!(sub_path.points.len(), 2);
        assert_eq!(sub_path.points[0].anchor, point(-5.0 + 100.0, y + 100.0));
        assert_eq!(sub_path.points[1].anchor, point(5.0 + 100.0, y + 100.0));
    }
}

#[test]
fn single_diminishing_line() {
    let grid = DiminishingLines {
        num_lines: 1,
        span: 100.0,
        ratio: 1.0,
        line_length: 10.0,
        angle: 0.0,
        mirror: false,
        line_width: 0.0,
    };

    let paths = generate(&grid, size(200.0, 200.0)).unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths.sub_paths[0].points[0].anchor.y, 200.0);
    assert_eq!(paths.sub_paths[1].points[0].anchor.y, 100.0);
}

#[test]
fn vanishing_point_without_rings() {
    for spokes in 1..50 {
        let grid = VanishingPoint {
            num_spokes: spokes,
            num_rings: 1,
            ..VanishingPoint::default()
        };

        let paths = generate(&grid, size(500.0, 500.0)).unwrap();
        assert_eq!(paths.len(), spokes as usize);
        for sub_path in &paths {
            assert_eq!(sub_path.points[0].anchor, point(250.0, 250.0));
        }
    }
}

#[test]
fn band_width() {
    for &w in &[0.5, 1.0, 3.0, 12.0] {
        for grid in stroked_grids(23.0, w) {
            let paths = grid.generate(size(1000.0, 800.0), &GridOptions::default()).unwrap();
            assert!(all_finite(&paths));

            for sub_path in &paths {
                assert_eq!(sub_path.points.len(), 4);
                assert!(!sub_path.closed);

                let p = &sub_path.points;
                // Both ends are cut square with the requested width.
                assert!(fuzzy_eq((p[0].anchor - p[3].anchor).length(), w, 1e-9));
                assert!(fuzzy_eq((p[1].anchor - p[2].anchor).length(), w, 1e-9));

                if p[0].kind == PathPointKind::Corner {
                    // Straight bands have parallel long edges.
                    let outer = p[1].anchor - p[0].anchor;
                    let inner = p[2].anchor - p[3].anchor;
                    assert!(fuzzy_eq(outer.cross(inner), 0.0, 1e-6));
                    assert!(fuzzy_eq(outer.length(), inner.length(), 1e-9));
                }
            }
        }
    }
}

#[test]
fn closed_bands() {
    let options = GridOptions { close_bands: true };
    for grid in stroked_grids(0.0, 2.0) {
        let paths = grid.generate(size(1000.0, 800.0), &options).unwrap();
        for sub_path in &paths {
            assert!(sub_path.closed);
            // Two edges along the stroke, two caps.
            assert_eq!(sub_path.segments().count(), 4);
        }
    }

    // Thin lines stay open.
    for grid in default_grids() {
        let paths = grid.generate(size(1000.0, 800.0), &options).unwrap();
        assert!(paths.iter().all(|sp| !sp.closed && sp.len() == 2));
    }
}

#[test]
fn rotation_round_trip() {
    let angles = [0.0, 0.3, -1.2, 2.5, 3.14, 10.0];
    let points = [point(1.0, 0.0), point(-3.5, 7.25), point(1e3, -2e3)];

    for &a in &angles {
        for &p in &points {
            let q = p.rotated(Angle::radians(a)).rotated(Angle::radians(-a));
            assert!((q - p).length() < 1e-9);

            let v = p.to_vector();
            let u = v.rotated(Angle::radians(a));
            assert!(fuzzy_eq(u.length(), v.length(), 1e-9));
        }
    }
}

#[test]
fn rigid_placement() {
    let canvas = size(640.0, 480.0);
    let center = point(320.0, 240.0);

    for (straight, rotated) in default_grids().iter().zip(stroked_grids(71.0, 0.0).iter()) {
        let a = straight.generate(canvas, &GridOptions::default()).unwrap();
        let b = rotated.generate(canvas, &GridOptions::default()).unwrap();
        assert_eq!(a.len(), b.len());

        for (sa, sb) in a.iter().zip(b.iter()) {
            for (pa, pb) in sa.points.iter().zip(sb.points.iter()) {
                let da = (pa.anchor - center).length();
                let db = (pb.anchor - center).length();
                assert!(fuzzy_eq(da, db, 1e-9));
            }
        }
    }
}

#[test]
fn ellipse_handles() {
    let grid = Ellipses {
        num_lines: 7,
        length: 420.0,
        height: 210.0,
        angle: 30.0,
        line_width: 0.0,
    };

    let paths = generate(&grid, size(800.0, 800.0)).unwrap();
    for i in 0..7 {
        let y = 210.0 * (i + 1) as f64 / 7.0;
        for arc in &paths.sub_paths[i * 4..i * 4 + 4] {
            let segment = match arc.segments().next() {
                Some(PathSegment::Cubic(segment)) => segment,
                other => panic!("expected a curve, got {:?}", other),
            };

            // One handle is vertical (height), the other horizontal (half length).
            let mut lengths = [
                (segment.ctrl1 - segment.from).length(),
                (segment.to - segment.ctrl2).length(),
            ];
            lengths.sort_by(|x, y| x.partial_cmp(y).unwrap());
            let mut expected = [y * ELLIPSE_HANDLE_RATIO, 210.0 * ELLIPSE_HANDLE_RATIO];
            expected.sort_by(|x, y| x.partial_cmp(y).unwrap());
            assert!(fuzzy_eq(lengths[0], expected[0], 1e-9));
            assert!(fuzzy_eq(lengths[1], expected[1], 1e-9));
        }
    }
}

#[test]
fn invalid_parameters() {
    let canvas = size(100.0, 100.0);

    let grid = ParallelLines {
        num_lines: 0,
        ..ParallelLines::default()
    };
    assert_eq!(
        generate(&grid, canvas),
        Err(ParameterError::NonPositiveCount {
            name: "num_lines",
            value: 0
        })
    );

    let grid = Parabolas {
        radius: -1.0,
        ..Parabolas::default()
    };
    assert!(generate(&grid, canvas).is_err());

    let grid = VanishingPoint {
        angle: f64::NAN,
        ..VanishingPoint::default()
    };
    assert_eq!(
        generate_with(&grid, canvas, &GridOptions::default()),
        Err(ParameterError::NotFinite { name: "angle" })
    );
}

#[test]
fn host_document() {
    let grid = Parabolas {
        num_lines: 2,
        ..Parabolas::default()
    };
    let paths = generate(&grid, size(1024.0, 768.0)).unwrap();

    let mut host = DocumentHost::new();
    assert_eq!(
        host.create_path_layer(Parabolas::TITLE, &paths),
        Err(SinkError::NoActiveDocument)
    );

    host.open(Document::new(1024.0, 768.0, 300.0).unwrap());
    host.create_path_layer(Parabolas::TITLE, &paths).unwrap();

    let document = host.close().unwrap();
    assert_eq!(document.resolution(), 300.0);
    assert_eq!(document.items().len(), 1);
    assert_eq!(document.items()[0].sub_paths, paths.sub_paths);

    let svg = document.to_svg();
    assert!(svg.starts_with("<svg "));
    assert_eq!(svg.matches("<path ").count(), 1);
    assert!(svg.contains(r#"id="Parabolas""#));
    assert!(svg.contains(r#"fill="none" stroke="black""#));
}

#[test]
fn grid_from_json() {
    let grid: Grid = serde_json::from_str(r#"{ "grid": "vanishing_point", "num_spokes": 4 }"#).unwrap();
    assert_eq!(
        grid,
        Grid::VanishingPoint(VanishingPoint {
            num_spokes: 4,
            ..VanishingPoint::default()
        })
    );

    let paths = grid.generate(size(300.0, 300.0), &GridOptions::default()).unwrap();
    // 4 spokes, 1 + 2 ticks per spoke.
    assert_eq!(paths.len(), 16);

    let json = serde_json::to_value(&paths).unwrap();
    assert_eq!(json["title"], "Vanishing Point");
    assert_eq!(json["sub_paths"].as_array().unwrap().len(), 16);
    assert_eq!(json["sub_paths"][0]["points"][0]["kind"], "Corner");
    assert_eq!(json["sub_paths"][0]["closed"], false);
    // The first spoke points right, three rings long.
    assert_eq!(json["sub_paths"][0]["points"][1]["anchor"][0], 750.0);
}
