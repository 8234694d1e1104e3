use super::Point;

/// A 2D affine transform.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`, the same layout as
/// the SVG `matrix(a b c d e f)` transform function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1., 0., 0., 1., 0., 0.);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1., 0., 0., 1., tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0., 0., sy, 0., 0.)
    }

    /// Scale about the pivot `(cx, cy)`
    pub fn scale_at(sx: f64, sy: f64, cx: f64, cy: f64) -> Self {
        Self::translate(-cx, -cy)
            .then(&Self::scale(sx, sy))
            .then(&Self::translate(cx, cy))
    }

    /// Rotation by `angle` degrees (positive is clockwise in SVG's y-down space)
    pub fn rotate(angle: f64) -> Self {
        let (sin_a, cos_a) = angle.to_radians().sin_cos();
        Self::new(cos_a, sin_a, -sin_a, cos_a, 0., 0.)
    }

    /// Rotate by `angle` degrees about the pivot `(cx, cy)`
    pub fn rotate_at(angle: f64, cx: f64, cy: f64) -> Self {
        Self::translate(-cx, -cy)
            .then(&Self::rotate(angle))
            .then(&Self::translate(cx, cy))
    }

    pub fn skew_x(angle: f64) -> Self {
        Self::new(1., 0., angle.to_radians().tan(), 1., 0., 0.)
    }

    pub fn skew_y(angle: f64) -> Self {
        Self::new(1., angle.to_radians().tan(), 0., 1., 0., 0.)
    }

    /// Flip left-to-right about the vertical line `x = cx`
    pub fn mirror_horizontal(cx: f64) -> Self {
        Self::scale_at(-1., 1., cx, 0.)
    }

    /// Flip top-to-bottom about the horizontal line `y = cy`
    pub fn mirror_vertical(cy: f64) -> Self {
        Self::scale_at(1., -1., 0., cy)
    }

    /// Composition: the returned matrix applies `self` first, then `next`.
    pub fn then(&self, next: &Matrix) -> Self {
        Self::new(
            next.a * self.a + next.c * self.b,
            next.b * self.a + next.d * self.b,
            next.a * self.c + next.c * self.d,
            next.b * self.c + next.d * self.d,
            next.a * self.e + next.c * self.f + next.e,
            next.b * self.e + next.d * self.f + next.f,
        )
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Apply only the linear part; used for offsets, which are unaffected
    /// by translation.
    pub fn apply_vector(&self, v: Point) -> Point {
        Point::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// True if the transform flips orientation
    pub fn is_reflection(&self) -> bool {
        self.determinant() < 0.
    }

    /// Rotation of the x-axis under this transform, in degrees
    pub fn rotation_degrees(&self) -> f64 {
        self.b.atan2(self.a).to_degrees()
    }

    /// Length of the transformed unit x and y axes
    pub fn scale_factors(&self) -> (f64, f64) {
        (self.a.hypot(self.b), self.c.hypot(self.d))
    }

    /// True when horizontal lines stay horizontal
    pub fn preserves_horizontal(&self) -> bool {
        self.b == 0.
    }

    /// True when vertical lines stay vertical
    pub fn preserves_vertical(&self) -> bool {
        self.c == 0.
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .iter()
            .all(|v| v.is_finite())
    }
}
