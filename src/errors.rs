use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A character in command position which is not a path command letter
    UnknownCommand(char),
    /// Parameter count for a command is not a positive multiple of its arity
    InvalidParameterCount { command: char, count: usize },
    /// A parameter evaluated to NaN or +/- infinity
    NonFiniteParameter(String),
    /// Malformed number or unexpected text in path data
    Parse(String),
    /// `replace_at` / `set_relative` index beyond the end of the path
    IndexOutOfRange { index: usize, len: usize },
    /// Geometry which cannot be drawn, e.g. an arc with coincident endpoints
    DegenerateGeometry(String),
    /// Resolved data was requested from a path edited since its last resolve
    Unresolved,
    /// Transform list text which could not be interpreted
    InvalidTransform(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCommand(c) => write!(f, "Unknown path command '{c}'"),
            Error::InvalidParameterCount { command, count } => {
                write!(f, "Unexpected number ({count}) of parameters for '{command}'")
            }
            Error::NonFiniteParameter(value) => write!(f, "Invalid parameter '{value}'"),
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for path of length {len}")
            }
            Error::DegenerateGeometry(reason) => write!(f, "Degenerate geometry: {reason}"),
            Error::Unresolved => write!(f, "Path has been modified and must be resolved"),
            Error::InvalidTransform(reason) => write!(f, "Invalid transform: {reason}"),
        }
    }
}

impl StdError for Error {}

impl Error {
    /// True for errors which produced no output rather than a failure,
    /// e.g. a zero-length arc which simply draws nothing.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::DegenerateGeometry(_))
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}
