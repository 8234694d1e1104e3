use super::draw::Graphics;
use crate::geometry::{BoundingBox, BoundingBoxBuilder, Point};

/// A `Graphics` consumer which accumulates the bounding box of everything
/// drawn into it, including the extrema of curves.
#[derive(Debug, Clone, Default)]
pub struct BoundsCollector {
    // current position, updated as drawing proceeds
    current: Option<Point>,
    // location to return to for close_path
    subpath_start: Option<Point>,
    builder: BoundingBoxBuilder,
}

impl BoundsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn update_position(&mut self, p: Point) {
        self.current = Some(p);
        self.builder.extend_point(p);
    }

    fn start(&self) -> Point {
        self.current.unwrap_or(Point::ZERO)
    }

    pub fn build(self) -> Option<BoundingBox> {
        self.builder.build()
    }
}

impl Graphics for BoundsCollector {
    fn move_to(&mut self, p: Point) {
        self.update_position(p);
        self.subpath_start = Some(p);
    }

    fn line_to(&mut self, p: Point) {
        if self.current.is_none() {
            self.builder.extend_point(Point::ZERO);
        }
        self.update_position(p);
    }

    fn curve_to(&mut self, control1: Point, control2: Point, p: Point) {
        let start = self.start();
        if self.current.is_none() {
            self.builder.extend_point(start);
        }
        for e in cubic_extrema(start, control1, control2, p) {
            self.builder.extend_point(e);
        }
        self.update_position(p);
    }

    fn quad_to(&mut self, control: Point, p: Point) {
        let start = self.start();
        if self.current.is_none() {
            self.builder.extend_point(start);
        }
        for e in quadratic_extrema(start, control, p) {
            self.builder.extend_point(e);
        }
        self.update_position(p);
    }

    fn close_path(&mut self) {
        if let Some(start) = self.subpath_start {
            self.current = Some(start);
        }
    }
}

fn quadratic_extrema(start: Point, cp: Point, end: Point) -> Vec<Point> {
    // Evaluate quadratic Bezier for a single coordinate
    fn bezier(t: f64, p0: f64, p1: f64, p2: f64) -> f64 {
        let mt = 1.0 - t;
        mt * mt * p0 + 2.0 * mt * t * p1 + t * t * p2
    }

    // Compute stationary point t for one dimension,
    // if it lies in (0,1) (the range of t for the curve)
    fn stationary_t(p0: f64, p1: f64, p2: f64) -> Option<f64> {
        // B'(t) = 2(1-t)(p1-p0) + 2t(p2-p1)
        // B'(t) == 0  when  t = (p0-p1) / (p0-2p1+p2)
        let denom = p0 - 2.0 * p1 + p2;
        if denom.abs() < 1e-12 {
            None
        } else {
            let t = (p0 - p1) / denom;
            (t > 0.0 && t < 1.0).then_some(t)
        }
    }

    [
        stationary_t(start.x, cp.x, end.x),
        stationary_t(start.y, cp.y, end.y),
    ]
    .into_iter()
    .flatten()
    .map(|t| {
        Point::new(
            bezier(t, start.x, cp.x, end.x),
            bezier(t, start.y, cp.y, end.y),
        )
    })
    .collect()
}

fn cubic_extrema(start: Point, cp1: Point, cp2: Point, end: Point) -> Vec<Point> {
    fn cubic(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
        let mt = 1.0 - t;
        mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
    }

    fn stationary_ts(p0: f64, p1: f64, p2: f64, p3: f64) -> Vec<f64> {
        // B'(t) = 3(1-t)^2 (p1-p0) + 6(1-t)t (p2-p1) + 3t^2 (p3-p2)
        // as at^2 + bt + c = 0
        let a = 3.0 * (p3 - 3.0 * p2 + 3.0 * p1 - p0);
        let b = 6.0 * (p2 - 2.0 * p1 + p0);
        let c = 3.0 * (p1 - p0);

        let in_range = |t: &f64| *t > 0.0 && *t < 1.0;
        if a.abs() < 1e-12 {
            // linear: bt + c = 0
            if b.abs() < 1e-12 {
                return vec![];
            }
            return [-c / b].into_iter().filter(in_range).collect();
        }
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return vec![];
        }
        let sqrt_disc = disc.sqrt();
        let inv_2a = 1.0 / (2.0 * a);
        [(-b + sqrt_disc) * inv_2a, (-b - sqrt_disc) * inv_2a]
            .into_iter()
            .filter(in_range)
            .collect()
    }

    let mut all_t = stationary_ts(start.x, cp1.x, cp2.x, end.x);
    all_t.extend(stationary_ts(start.y, cp1.y, cp2.y, end.y));

    all_t
        .into_iter()
        .map(|t| {
            Point::new(
                cubic(t, start.x, cp1.x, cp2.x, end.x),
                cubic(t, start.y, cp1.y, cp2.y, end.y),
            )
        })
        .collect()
}
