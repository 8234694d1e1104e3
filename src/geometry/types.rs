use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::fstr;

/// A location (or offset, for relative commands) in user coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0., y: 0. };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect this point through `centre`, i.e. `2 * centre - self`.
    ///
    /// This is how the implicit control point of `S`/`T` commands is
    /// derived from the previous curve's trailing control point.
    pub fn reflect_about(self, centre: Point) -> Self {
        centre + (centre - self)
    }

    pub fn lerp(self, other: Point, t: f64) -> Self {
        self + (other - self) * t
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", fstr(self.x), fstr(self.y))
    }
}

/// Arc radii; `width` is the x-radius, `height` the y-radius
/// (both before the arc's own rotation is applied).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn as_wh(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self::new(self.width * sx, self.height * sy)
    }

    /// A circle has no observable rotation
    pub fn is_circular(&self) -> bool {
        self.width == self.height
    }
}
