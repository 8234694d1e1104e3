use assertables::assert_contains;

use pathedit::path::Path;
use pathedit::{normalize_path_str_default, parse_path, Error};

#[test]
fn test_parse_errors() {
    assert_eq!(parse_path("M 0 0 K 1 1"), Err(Error::UnknownCommand('K')));
    assert_eq!(
        parse_path("M 0 0 A 1 1 0 0 1 5"),
        Err(Error::InvalidParameterCount {
            command: 'A',
            count: 6
        })
    );
    assert_eq!(
        parse_path("M 0 0 L 1 Infinity"),
        Err(Error::NonFiniteParameter("Infinity".to_string()))
    );
    assert!(matches!(parse_path("M 0 0 L 1,,2"), Err(Error::Parse(_))));
    assert_eq!(parse_path("M 0 0 é 1 1"), Err(Error::UnknownCommand('é')));
}

#[test]
fn test_parse_is_atomic() {
    // a valid prefix is not returned when a later command fails
    assert!(Path::parse("M 0 0 L 10 10 L 5").is_err());
    assert!(!Path::check("M 0 0 L 10 10 L 5"));
    assert!(Path::check("M 0 0 L 10 10 L 5 5"));
}

#[test]
fn test_error_messages() {
    let err = normalize_path_str_default("M 0 0 L 1").unwrap_err();
    assert_contains!(err.to_string(), "'L'");
    let err = normalize_path_str_default("M 0 0 Q 1 2 3 4 X").unwrap_err();
    assert_contains!(err.to_string(), "'X'");
    assert!(!err.is_recoverable());
}
