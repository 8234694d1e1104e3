use std::str::FromStr;

use super::Matrix;
use crate::errors::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
enum TransformType {
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate(f64, f64, f64),
    SkewX(f64),
    SkewY(f64),
    Matrix(f64, f64, f64, f64, f64, f64),
}

impl TransformType {
    fn to_matrix(&self) -> Matrix {
        match *self {
            TransformType::Translate(tx, ty) => Matrix::translate(tx, ty),
            TransformType::Scale(sx, sy) => Matrix::scale(sx, sy),
            TransformType::Rotate(angle, cx, cy) => Matrix::rotate_at(angle, cx, cy),
            TransformType::SkewX(angle) => Matrix::skew_x(angle),
            TransformType::SkewY(angle) => Matrix::skew_y(angle),
            TransformType::Matrix(a, b, c, d, e, f) => Matrix::new(a, b, c, d, e, f),
        }
    }
}

fn arg_count_error(name: &str) -> Error {
    Error::InvalidTransform(format!("invalid number of arguments for {name}"))
}

impl FromStr for TransformType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.splitn(2, '(');
        let name = parts
            .next()
            .ok_or_else(|| Error::InvalidTransform("no transform name".to_owned()))?
            .trim();
        let args = parts
            .next()
            .ok_or_else(|| Error::InvalidTransform(format!("no arguments for '{name}'")))?
            .strip_suffix(')')
            .ok_or_else(|| Error::InvalidTransform("no closing bracket".to_owned()))?
            .split(&[',', ' ', '\t', '\n', '\r'])
            .filter(|&v| !v.is_empty())
            .map(|v| {
                v.parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| Error::InvalidTransform(format!("bad number '{v}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        // See https://www.w3.org/TR/SVG11/coords.html#TransformAttribute
        Ok(match name.to_lowercase().as_str() {
            "translate" => match args[..] {
                // "If <ty> is not provided, it is assumed to be zero."
                [tx] => TransformType::Translate(tx, 0.),
                [tx, ty] => TransformType::Translate(tx, ty),
                _ => return Err(arg_count_error("translate")),
            },
            "scale" => match args[..] {
                // "If <sy> is not provided, it is assumed to be equal to <sx>."
                [s] => TransformType::Scale(s, s),
                [sx, sy] => TransformType::Scale(sx, sy),
                _ => return Err(arg_count_error("scale")),
            },
            "rotate" => match args[..] {
                [angle] => TransformType::Rotate(angle, 0., 0.),
                [angle, cx, cy] => TransformType::Rotate(angle, cx, cy),
                _ => return Err(arg_count_error("rotate")),
            },
            "skewx" => match args[..] {
                [angle] => TransformType::SkewX(angle),
                _ => return Err(arg_count_error("skewX")),
            },
            "skewy" => match args[..] {
                [angle] => TransformType::SkewY(angle),
                _ => return Err(arg_count_error("skewY")),
            },
            "matrix" => match args[..] {
                [a, b, c, d, e, f] => TransformType::Matrix(a, b, c, d, e, f),
                _ => return Err(arg_count_error("matrix")),
            },
            _ => Err(Error::InvalidTransform(format!(
                "unknown transform type: '{name}'"
            )))?,
        })
    }
}

/// A list of transform functions in SVG `transform` attribute syntax,
/// e.g. `"translate(10, 20) rotate(45)"`.
///
/// As with SVG, the list applies right-to-left to a point: in the example
/// the rotation happens first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransformList {
    transforms: Vec<TransformType>,
}

impl FromStr for TransformList {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let parts = value.split_inclusive(')').map(|v| v.trim());
        Ok(Self {
            transforms: parts
                .map(|v| v.trim_start_matches([',', ' ', '\t', '\n', '\r']))
                .filter(|v| !v.is_empty())
                .map(|v| v.parse())
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl TransformList {
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Collapse the list into a single matrix
    pub fn to_matrix(&self) -> Matrix {
        self.transforms
            .iter()
            .rev()
            .fold(Matrix::IDENTITY, |acc, t| acc.then(&t.to_matrix()))
    }
}
