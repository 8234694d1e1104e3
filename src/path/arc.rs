use std::f64::consts::PI;

use super::command::{Command, CommandKind};
use super::resolve::Resolved;
use crate::errors::{Error, Result};
use crate::geometry::{Point, Size};

/// One cubic Bezier segment; the start point is implied by the previous
/// segment (or the arc's start).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicSegment {
    /// A straight segment from `start` to `end`
    pub fn line(start: Point, end: Point) -> Self {
        Self {
            control1: start.lerp(end, 1. / 3.),
            control2: start.lerp(end, 2. / 3.),
            end,
        }
    }
}

/// An elliptical arc in SVG endpoint parameterization, with absolute points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    pub start: Point,
    pub end: Point,
    pub radius: Size,
    /// x-axis rotation, degrees
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Centre parameterization of an arc, angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Point,
    pub radius: Size,
    pub rotation: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl EllipticalArc {
    /// The arc described by `cmd` given its resolution, or `None` if `cmd`
    /// is not an arc.
    pub fn from_command(cmd: &Command, resolved: &Resolved) -> Option<Self> {
        match cmd.kind {
            CommandKind::Arc {
                radius,
                rotation,
                large_arc,
                sweep,
            } => Some(Self {
                start: resolved.start,
                end: resolved.end,
                radius,
                rotation,
                large_arc,
                sweep,
            }),
            _ => None,
        }
    }

    /// Zero radii turn the arc into a straight line
    pub fn is_straight(&self) -> bool {
        self.radius.width == 0. || self.radius.height == 0.
    }

    /// Solve for the ellipse centre and angles.
    ///
    /// When the radii are too small to span the endpoints they are scaled
    /// up and the computation repeated, at most `retry_limit` times; `None`
    /// is returned if that still fails. Coincident endpoints give
    /// `Error::DegenerateGeometry`.
    pub fn center_parameterize(&self, retry_limit: u32) -> Result<Option<CenterArc>> {
        let theta = self.rotation.to_radians();
        let (sin_t, cos_t) = theta.sin_cos();
        let (x0, y0) = (self.start.x, self.start.y);
        let (x1, y1) = (self.end.x, self.end.y);
        let (mut a, mut b) = (self.radius.width.abs(), self.radius.height.abs());

        for attempt in 0..=retry_limit {
            // map both endpoints into the unit-circle space of the ellipse
            // using the inverse rotation, followed by inverse scale
            let x0p = (x0 * cos_t + y0 * sin_t) / a;
            let y0p = (-x0 * sin_t + y0 * cos_t) / b;
            let x1p = (x1 * cos_t + y1 * sin_t) / a;
            let y1p = (-x1 * sin_t + y1 * cos_t) / b;

            let dx = x0p - x1p;
            let dy = y0p - y1p;
            let xm = (x0p + x1p) / 2.;
            let ym = (y0p + y1p) / 2.;

            // solve for intersecting unit circles
            let dsq = dx * dx + dy * dy;
            if dsq == 0. {
                return Err(Error::DegenerateGeometry(format!(
                    "arc endpoints coincide at {}",
                    self.start
                )));
            }
            let disc = 1. / dsq - 0.25;
            if disc < 0. {
                if attempt == retry_limit {
                    break;
                }
                let adjust = dsq.sqrt() / 1.99999;
                tracing::warn!(dsq, adjust, "arc radii too small; enlarging");
                a *= adjust;
                b *= adjust;
                continue;
            }

            let s = disc.sqrt();
            let sdx = s * dx;
            let sdy = s * dy;
            let (cx, cy) = if self.large_arc == self.sweep {
                (xm - sdy, ym + sdx)
            } else {
                (xm + sdy, ym - sdx)
            };

            let eta0 = (y0p - cy).atan2(x0p - cx);
            let eta1 = (y1p - cy).atan2(x1p - cx);
            let mut sweep = eta1 - eta0;
            if self.sweep != (sweep >= 0.) {
                if sweep > 0. {
                    sweep -= 2. * PI;
                } else {
                    sweep += 2. * PI;
                }
            }

            // back from unit space
            let (cx, cy) = (cx * a, cy * b);
            let center = Point::new(cx * cos_t - cy * sin_t, cx * sin_t + cy * cos_t);

            return Ok(Some(CenterArc {
                center,
                radius: Size::new(a, b),
                rotation: theta,
                start_angle: eta0,
                sweep_angle: sweep,
            }));
        }
        Ok(None)
    }

    /// Approximate the arc with cubic Bezier segments of at most 45 degrees.
    ///
    /// The last segment always ends exactly on `self.end`. Coincident
    /// endpoints give no segments; zero radii give a single straight segment.
    pub fn to_cubics(&self, retry_limit: u32) -> Vec<CubicSegment> {
        if self.start == self.end {
            tracing::debug!(start = %self.start, "skipping zero-length arc");
            return vec![];
        }
        if self.is_straight() {
            return vec![CubicSegment::line(self.start, self.end)];
        }
        match self.center_parameterize(retry_limit) {
            Ok(Some(centre)) => {
                let mut segments = centre.to_cubics(self.start);
                if let Some(last) = segments.last_mut() {
                    last.end = self.end;
                }
                segments
            }
            Ok(None) => {
                tracing::warn!(retry_limit, "arc radii could not be fitted; drawing a line");
                vec![CubicSegment::line(self.start, self.end)]
            }
            Err(err) => {
                tracing::debug!(%err, "no arc segments");
                vec![]
            }
        }
    }
}

impl CenterArc {
    /// Point on the ellipse at parametric angle `eta`
    pub fn point_at(&self, eta: f64) -> Point {
        let (a, b) = self.radius.as_wh();
        let (sin_t, cos_t) = self.rotation.sin_cos();
        let (sin_e, cos_e) = eta.sin_cos();
        Point::new(
            self.center.x + a * cos_t * cos_e - b * sin_t * sin_e,
            self.center.y + a * sin_t * cos_e + b * cos_t * sin_e,
        )
    }

    /// Derivative of `point_at` with respect to `eta`
    fn tangent_at(&self, eta: f64) -> Point {
        let (a, b) = self.radius.as_wh();
        let (sin_t, cos_t) = self.rotation.sin_cos();
        let (sin_e, cos_e) = eta.sin_cos();
        Point::new(
            -a * cos_t * sin_e - b * sin_t * cos_e,
            -a * sin_t * sin_e + b * cos_t * cos_e,
        )
    }

    /// Cubic approximation, see L. Maisonobe, "Drawing an elliptical arc
    /// using polylines, quadratic or cubic Bezier curves" (2003).
    pub fn to_cubics(&self, start: Point) -> Vec<CubicSegment> {
        // at most 45 degrees per segment
        let count = ((self.sweep_angle * 4. / PI).abs().ceil() as usize).max(1);
        let step = self.sweep_angle / count as f64;
        let tan_half = (step / 2.).tan();
        let alpha = step.sin() * ((4. + 3. * tan_half * tan_half).sqrt() - 1.) / 3.;

        let mut eta1 = self.start_angle;
        let mut e1 = start;
        let mut ep1 = self.tangent_at(eta1);
        let mut segments = Vec::with_capacity(count);
        for _ in 0..count {
            let eta2 = eta1 + step;
            let e2 = self.point_at(eta2);
            let ep2 = self.tangent_at(eta2);
            segments.push(CubicSegment {
                control1: e1 + ep1 * alpha,
                control2: e2 - ep2 * alpha,
                end: e2,
            });
            eta1 = eta2;
            e1 = e2;
            ep1 = ep2;
        }
        segments
    }
}
