//! ## pathedit - edit SVG path data
//!
//! `pathedit` parses the SVG path mini-language (`M L H V C S Q T A Z` and
//! their relative forms) into a sequence of commands, resolves each command's
//! absolute geometry, and supports transforming, drawing and re-serializing
//! the result.
//!
//! ## Library use
//!
//! The `path::Path` type is the editable container; string-level helpers in
//! this module cover the common one-shot conversions. A `PathConfig` value
//! controls output precision and arc conversion limits.
//!
//! Errors are reported via `pathedit::Result`.
//!
//! ## Example
//!
//! ```
//! let cfg = pathedit::PathConfig::default();
//!
//! let output = pathedit::transform_path_str("M 0 0 h 10 v 10 z", "translate(5, 5)", &cfg).unwrap();
//! assert_eq!(output, "M 5 5 h 10 v 10 z");
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod errors;
pub mod geometry;
pub mod path;

pub use errors::{Error, Result};
use geometry::TransformList;
use path::{Command, Path};

// Allow users of this as a library to easily retrieve the version being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for composing and converting paths.
#[derive(Clone, Debug, PartialEq)]
pub struct PathConfig {
    /// Maximum decimal places in composed output (`None` for shortest exact)
    pub precision: Option<usize>,
    /// Digit count for coordinate rounding (default 5)
    pub round_digits: usize,
    /// Maximum number of radius enlargements when an arc's radii are too
    /// small to reach its end point
    pub arc_retry_limit: u32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            precision: None,
            round_digits: 5,
            arc_retry_limit: 8,
        }
    }
}

/// Return a 'minimal' representation of the given number
pub(crate) fn fstr(x: f64) -> String {
    fstr_with(x, None)
}

/// As `fstr`, limited to `precision` decimal places when given
pub(crate) fn fstr_with(x: f64, precision: Option<usize>) -> String {
    let result = match precision {
        Some(p) => format!("{x:.p$}"),
        None => x.to_string(),
    };
    let result = if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        result
    };
    if result == "-0" {
        "0".to_string()
    } else {
        result
    }
}

/// Parse path data into a list of commands.
pub fn parse_path(input: &str) -> Result<Vec<Command>> {
    path::parse(input)
}

/// Serialize commands back into compact path data.
pub fn compose_path(commands: &[Command], cfg: &PathConfig) -> String {
    path::compose(commands, cfg.precision)
}

/// Apply an SVG transform list (e.g. `"rotate(90) translate(10)"`) to
/// path data, keeping each command's relative / absolute encoding.
pub fn transform_path_str(input: &str, transform: &str, cfg: &PathConfig) -> Result<String> {
    let matrix = transform.parse::<TransformList>()?.to_matrix();
    let mut path = Path::parse(input)?;
    path.transform(&matrix)?;
    Ok(path.compose_with(cfg))
}

/// Round every coordinate in `input` to `digits` decimal places.
pub fn round_path_str(input: &str, digits: usize, cfg: &PathConfig) -> Result<String> {
    let mut path = Path::parse(input)?;
    path.round_coordinates(digits);
    Ok(path.compose_with(cfg))
}

/// Re-serialize `input` in canonical form.
pub fn normalize_path_str(input: &str, cfg: &PathConfig) -> Result<String> {
    Ok(Path::parse(input)?.compose_with(cfg))
}

/// Uses default `PathConfig` settings.
pub fn transform_path_str_default(input: &str, transform: &str) -> Result<String> {
    transform_path_str(input, transform, &PathConfig::default())
}

/// Rounds to `PathConfig::default().round_digits` places.
pub fn round_path_str_default(input: &str) -> Result<String> {
    let cfg = PathConfig::default();
    round_path_str(input, cfg.round_digits, &cfg)
}

/// Uses default `PathConfig` settings.
pub fn normalize_path_str_default(input: &str) -> Result<String> {
    normalize_path_str(input, &PathConfig::default())
}

/// Transform path data `input` by the SVG transform list `transform`.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn transform_path_string(
    input: String,
    transform: String,
) -> core::result::Result<String, String> {
    transform_path_str_default(&input, &transform).map_err(|e| e.to_string())
}
