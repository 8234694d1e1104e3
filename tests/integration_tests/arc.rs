use assertables::assert_in_delta;

use pathedit::geometry::{Matrix, Point};
use pathedit::path::{CommandKind, EllipticalArc, Graphics, Path};
use pathedit::PathConfig;

#[derive(Default)]
struct Curves {
    moves: usize,
    lines: Vec<Point>,
    curves: Vec<(Point, Point, Point)>,
}

impl Graphics for Curves {
    fn move_to(&mut self, _: Point) {
        self.moves += 1;
    }
    fn line_to(&mut self, p: Point) {
        self.lines.push(p);
    }
    fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.curves.push((c1, c2, p));
    }
    fn quad_to(&mut self, _: Point, _: Point) {}
    fn close_path(&mut self) {}
}

#[test]
fn test_arc_endpoint_exactness() {
    let cfg = PathConfig::default();
    for data in [
        "M 3 7 A 30 12 33 1 0 40 25",
        "M 3 7 a 30 12 33 0 1 37 18",
        "M -5 2 A 1 1 0 0 0 15 -3",
        "M 0 0 A 50 20 -120 1 1 0.001 0.001",
        "M 10 10 a 7 3 400 1 0 -20 5",
    ] {
        let path = Path::parse(data).unwrap();
        let segs = path.arc_segments(1, &cfg).unwrap().unwrap();
        let end = path.resolved().unwrap()[1].end;
        let last = segs.last().unwrap().end;
        assert_in_delta!(last.x, end.x, 1e-6);
        assert_in_delta!(last.y, end.y, 1e-6);
    }
}

#[test]
fn test_arc_segment_limit() {
    let path = Path::parse("M 10 0 A 10 10 0 1 1 10 -0.0001").unwrap();
    let segs = path.arc_segments(1, &PathConfig::default()).unwrap().unwrap();
    // almost a full circle: eight 45 degree pieces
    assert_eq!(segs.len(), 8);
}

#[test]
fn test_arc_drawn_on_ellipse() {
    let path = Path::parse("M 0 0 A 20 10 0 0 1 40 0").unwrap();
    let mut g = Curves::default();
    path.draw_to(&mut g, &PathConfig::default()).unwrap();
    assert_eq!(g.moves, 1);
    assert!(g.lines.is_empty());
    assert_eq!(g.curves.len(), 4);
    for (_, _, p) in &g.curves {
        // (x - 20)^2 / 400 + y^2 / 100 == 1
        let v = (p.x - 20.).powi(2) / 400. + p.y.powi(2) / 100.;
        assert_in_delta!(v, 1., 1e-9);
    }
}

#[test]
fn test_degenerate_arcs() {
    let cfg = PathConfig::default();
    // coincident endpoints draw nothing
    let path = Path::parse("M 4 4 A 5 5 0 0 1 4 4 L 8 8").unwrap();
    assert_eq!(path.arc_segments(1, &cfg), Ok(Some(vec![])));
    let mut g = Curves::default();
    path.draw_to(&mut g, &cfg).unwrap();
    assert!(g.curves.is_empty());
    assert_eq!(g.lines, vec![Point::new(8., 8.)]);

    // zero radius is a straight line
    let path = Path::parse("M 0 0 a 0 0 0 0 1 6 3").unwrap();
    let mut g = Curves::default();
    path.draw_to(&mut g, &cfg).unwrap();
    assert_eq!(g.lines, vec![Point::new(6., 3.)]);
}

#[test]
fn test_small_radii_retry_limit() {
    let arc = EllipticalArc {
        start: Point::new(0., 0.),
        end: Point::new(100., 0.),
        radius: pathedit::geometry::Size::new(1., 1.),
        rotation: 0.,
        large_arc: false,
        sweep: true,
    };
    let segs = arc.to_cubics(8);
    assert_eq!(segs.last().unwrap().end, Point::new(100., 0.));
    assert!(segs.len() > 1);
    // with retries disabled a single straight segment remains
    let segs = arc.to_cubics(0);
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].end, Point::new(100., 0.));
}

#[test]
fn test_transformed_arc_still_exact() {
    let mut path = Path::parse("M 1 2 A 8 3 15 1 0 9 -4").unwrap();
    path.transform(&Matrix::rotate(40.).then(&Matrix::translate(3., 3.)))
        .unwrap();
    assert!(matches!(path.get(1).unwrap().kind, CommandKind::Arc { .. }));
    let cfg = PathConfig::default();
    let segs = path.arc_segments(1, &cfg).unwrap().unwrap();
    let end = path.resolved().unwrap()[1].end;
    assert_eq!(segs.last().unwrap().end, end);
}
