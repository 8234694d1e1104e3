use assertables::assert_in_delta;

use pathedit::geometry::{Matrix, Point, TransformList};
use pathedit::path::{CommandKind, Path};
use pathedit::{transform_path_str, transform_path_str_default, PathConfig};

const SAMPLES: &[&str] = &[
    "M 3 4 h 5 V 1 c 1 2 3 4 5 6 S 1 1 2 2 q 1 0 2 2 t 4 4 A 5 5 0 0 1 20 20 l -3 -3 z m 1 1 v 2",
    "m 3 4 h 5 V 1 c 1 2 3 4 5 6 s 1 1 2 2 Q 1 0 2 2 t 4 4 a 5 5 0 0 1 8 8 z m 1 1 v 2",
    "h 4 v 3 l 1 1",
    "c 1 2 3 4 5 6 q 1 1 2 0",
];

fn ends(path: &Path) -> Vec<Point> {
    path.resolved().unwrap().iter().map(|r| r.end).collect()
}

fn assert_points_close(a: &[Point], b: &[Point]) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        assert_in_delta!(p.x, q.x, 1e-9);
        assert_in_delta!(p.y, q.y, 1e-9);
    }
}

#[test]
fn test_identity_transform() {
    for data in SAMPLES {
        let mut path = Path::parse(data).unwrap();
        let before = ends(&path);
        path.transform(&Matrix::IDENTITY).unwrap();
        assert_eq!(ends(&path), before);
        assert_eq!(path.compose(), Path::parse(data).unwrap().compose());
    }
}

#[test]
fn test_composable_transforms() {
    let t1 = Matrix::rotate_at(37., 5., -2.);
    let t2 = Matrix::skew_x(10.).then(&Matrix::scale(1.5, 0.5));

    for data in SAMPLES {
        let mut stepwise = Path::parse(data).unwrap();
        stepwise.transform(&t1).unwrap();
        stepwise.transform(&t2).unwrap();

        let mut single = Path::parse(data).unwrap();
        single.transform(&t1.then(&t2)).unwrap();

        assert_points_close(&ends(&stepwise), &ends(&single));
    }
}

#[test]
fn test_transform_maps_points() {
    let m = Matrix::new(0.8, 0.3, -0.4, 1.1, 7., -3.);
    for data in SAMPLES {
        let original = Path::parse(data).unwrap();
        let mut path = original.clone();
        path.transform(&m).unwrap();
        let expected: Vec<Point> = ends(&original).into_iter().map(|p| m.apply(p)).collect();
        // arc end points are mapped too; only its shape is approximated
        assert_points_close(&ends(&path), &expected);
        // encodings are kept
        for (a, b) in original.commands().iter().zip(path.commands()) {
            assert_eq!(a.relative, b.relative);
        }
    }
}

#[test]
fn test_mirror_flips_sweep() {
    let mut path = Path::parse("M 0 0 A 5 8 0 0 1 10 0").unwrap();
    path.transform(&Matrix::mirror_horizontal(5.)).unwrap();
    let CommandKind::Arc { radius, sweep, .. } = path.get(1).unwrap().kind else {
        panic!("expected arc");
    };
    assert!(!sweep);
    assert_eq!(radius.width.abs(), 5.);
    assert_eq!(radius.height.abs(), 8.);

    let mut path = Path::parse("M 0 0 a 5 5 0 1 0 10 0").unwrap();
    path.transform(&Matrix::mirror_vertical(0.)).unwrap();
    let CommandKind::Arc {
        sweep, large_arc, ..
    } = path.get(1).unwrap().kind
    else {
        panic!("expected arc");
    };
    assert!(sweep);
    assert!(large_arc);
}

#[test]
fn test_transform_list_strings() {
    assert_eq!(
        transform_path_str_default("M 0 0 h 10 v 10 z", "translate(5, 5)").unwrap(),
        "M 5 5 h 10 v 10 z"
    );
    // rotation turns H/V into lines
    let cfg = PathConfig {
        precision: Some(6),
        ..Default::default()
    };
    assert_eq!(
        transform_path_str("M 0 0 H 10 V 10", "rotate(90)", &cfg).unwrap(),
        "M 0 0 L 0 10 -10 10"
    );
    // lists apply right-to-left
    let list: TransformList = "translate(10) scale(2)".parse().unwrap();
    assert_eq!(list.to_matrix().apply(Point::new(1., 1.)), Point::new(12., 2.));
    assert_eq!(
        transform_path_str_default("M 1 1", "translate(10) scale(2)").unwrap(),
        "M 12 2"
    );
}

#[test]
fn test_translate_leading_relative() {
    assert_eq!(
        transform_path_str_default("m 10 10 l 5 0", "translate(5, 5)").unwrap(),
        "m 15 15 l 5 0"
    );
    let mut path = Path::parse("m 10 10 l 5 0").unwrap();
    path.transform(&Matrix::translate(5., 5.)).unwrap();
    assert_eq!(ends(&path), vec![Point::new(15., 15.), Point::new(20., 15.)]);
}
