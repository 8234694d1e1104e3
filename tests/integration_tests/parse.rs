use pathedit::geometry::Point;
use pathedit::path::{CommandKind, Path};

fn ends(path: &Path) -> Vec<Point> {
    path.resolved().unwrap().iter().map(|r| r.end).collect()
}

#[test]
fn test_scenario_closed_triangle() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10 Z").unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(
        ends(&path),
        vec![
            Point::new(0., 0.),
            Point::new(10., 0.),
            Point::new(10., 10.),
            Point::new(0., 0.),
        ]
    );
    assert!(path.get(3).unwrap().is_close());
}

#[test]
fn test_scenario_axis_lines() {
    let path = Path::parse("M0,0H10V10").unwrap();
    assert_eq!(path.get(1).unwrap().kind, CommandKind::LineHorizontal);
    assert_eq!(path.get(2).unwrap().kind, CommandKind::LineVertical);
    let ends = ends(&path);
    assert_eq!(ends[1], Point::new(10., 0.));
    assert_eq!(ends[2], Point::new(10., 10.));
}

#[test]
fn test_multiple_subpaths() {
    let path = Path::parse("M 0 0 l 5 0 l 0 5 z m 10 0 l 1 1 Z L 3 3").unwrap();
    let res = path.resolved().unwrap();
    assert_eq!(res[3].end, Point::new(0., 0.));
    assert_eq!(res[4].end, Point::new(10., 0.));
    assert_eq!(res[4].subpath_start, Point::new(10., 0.));
    assert_eq!(res[6].end, Point::new(10., 0.));
    assert_eq!(res[7].start, Point::new(10., 0.));
}

#[test]
fn test_names() {
    let path = Path::parse("M 0 0 h 1 V 1 C 1 1 1 1 1 1 s 1 1 1 1 Q 1 1 1 1 t 1 1 A 1 1 0 0 0 2 2 z")
        .unwrap();
    let names: Vec<_> = path.commands().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "Move",
            "Horizontal Line",
            "Vertical Line",
            "Cubic Bezier",
            "Smooth Cubic Bezier",
            "Quadratic Bezier",
            "Smooth Quadratic Bezier",
            "Arc",
            "Close"
        ]
    );
    let letters: String = path.commands().iter().map(|c| c.letter()).collect();
    assert_eq!(letters, "MhVCsQtAz");
}

#[test]
fn test_smooth_reflection() {
    let path = Path::parse("M 0 0 C 1 5 7 9 10 10 S 20 20 30 30").unwrap();
    let res = path.resolved().unwrap();
    let e = res[1].end;
    let c2 = res[1].control2.unwrap();
    assert_eq!(res[2].control1, Some(e * 2. - c2));
}

#[test]
fn test_exponent_and_compact_numbers() {
    let path = Path::parse("M1e1-2.5e-1L.5.5").unwrap();
    assert_eq!(
        ends(&path),
        vec![Point::new(10., -0.25), Point::new(0.5, 0.5)]
    );
}
