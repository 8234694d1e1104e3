use assertables::assert_contains;

use pathedit::geometry::{BoundingBox, Point};
use pathedit::path::{Command, Path};
use pathedit::{Error, PathConfig};

#[test]
fn test_batched_edits() {
    let mut path = Path::parse("M 0 0 L 10 0 L 10 10").unwrap();
    let ids = path.ids().to_vec();

    path.remove(ids[1]);
    path.insert_after(ids[0], Command::horizontal(true, 5.));
    path.push(Command::close(false));
    assert!(path.is_dirty());
    assert_eq!(path.resolved(), Err(Error::Unresolved));
    assert_eq!(
        path.bounding_box(&PathConfig::default()),
        Err(Error::Unresolved)
    );

    // composing only needs the raw commands
    assert_eq!(path.compose(), "M 0 0 h 5 L 10 10 Z");

    path.resolve();
    let ends: Vec<_> = path.resolved().unwrap().iter().map(|r| r.end).collect();
    assert_eq!(
        ends,
        vec![
            Point::new(0., 0.),
            Point::new(5., 0.),
            Point::new(10., 10.),
            Point::new(0., 0.)
        ]
    );
}

#[test]
fn test_replace_out_of_range() {
    let mut path = Path::parse("M 0 0 L 1 1").unwrap();
    let err = path
        .replace_at(2, Command::line(false, Point::new(2., 2.)))
        .unwrap_err();
    assert_eq!(err, Error::IndexOutOfRange { index: 2, len: 2 });
    assert_contains!(err.to_string(), "out of range");
    assert_eq!(path.len(), 2);
    assert!(!path.is_dirty());
}

#[test]
fn test_ids_survive_edits() {
    let mut path = Path::new();
    let a = path.push(Command::move_to(false, Point::new(1., 1.)));
    let b = path.push(Command::line(false, Point::new(2., 2.)));
    let c = path.insert_after(a, Command::line(true, Point::new(0., 5.)));
    assert_eq!(path.index_of(a), Some(0));
    assert_eq!(path.index_of(c), Some(1));
    assert_eq!(path.index_of(b), Some(2));
    path.remove(c);
    assert_eq!(path.index_of(b), Some(1));
    assert_eq!(path.index_of(c), None);
}

#[test]
fn test_snapshot_independence() {
    let mut path = Path::parse("M 0 0 L 4 4").unwrap();
    let snapshot = path.clone();
    path.round_coordinates(0);
    path.push(Command::close(true));
    path.resolve();
    assert_eq!(snapshot.compose(), "M 0 0 L 4 4");
    assert_eq!(path.compose(), "M 0 0 L 4 4 z");
}

#[test]
fn test_bounding_box() {
    let path = Path::parse("M 10 10 q 10 20 20 0 t 20 0").unwrap();
    let bb = path
        .bounding_box(&PathConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(bb, BoundingBox::new(10., 0., 50., 20.));
}

#[test]
fn test_display_fromstr() {
    let path: Path = "m1 1 2 2".parse().unwrap();
    assert_eq!(path.to_string(), "m 1 1 l 2 2");
    assert!("M 1".parse::<Path>().is_err());
}
