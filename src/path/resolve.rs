use super::command::{Command, CommandKind, CurveOrder};
use crate::geometry::Point;

/// Absolute geometry of a single command, derived by `resolve`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    /// Resolved point of the predecessor (origin for the first command)
    pub start: Point,
    /// Absolute position after this command executes
    pub end: Point,
    /// First (or only) control point of a curve, including inferred ones
    pub control1: Option<Point>,
    /// Second control point of a cubic curve
    pub control2: Option<Point>,
    /// Start of the sub-path this command belongs to
    pub subpath_start: Point,
}

impl Resolved {
    /// The control point a following smooth curve of the same order reflects
    pub fn last_control(&self) -> Option<Point> {
        self.control2.or(self.control1)
    }
}

/// Control point implied for a smooth curve of `order` starting at `start`.
///
/// Reflects the predecessor's trailing control point about its end when the
/// predecessor is a curve of the same order, otherwise coincides with `start`.
pub fn smooth_control(
    order: CurveOrder,
    prev: Option<(&Command, &Resolved)>,
    start: Point,
) -> Point {
    match prev {
        Some((prev_cmd, prev_res)) if prev_cmd.curve_order() == Some(order) => prev_res
            .last_control()
            .map(|c| c.reflect_about(prev_res.end))
            .unwrap_or(start),
        _ => start,
    }
}

/// Resolve one command given its predecessor and the predecessor's resolution.
pub fn resolve_step(cmd: &Command, prev: Option<(&Command, &Resolved)>) -> Resolved {
    let (start, subpath_start) = prev
        .map(|(_, r)| (r.end, r.subpath_start))
        .unwrap_or((Point::ZERO, Point::ZERO));
    let end = cmd.resolve_point(cmd.corrected_end(start), start);

    let (control1, control2) = match cmd.kind {
        CommandKind::BezierQuadratic { control } => {
            (Some(cmd.resolve_point(control, start)), None)
        }
        CommandKind::BezierCubic { control1, control2 } => (
            Some(cmd.resolve_point(control1, start)),
            Some(cmd.resolve_point(control2, start)),
        ),
        CommandKind::SmoothBezierQuadratic => {
            (Some(smooth_control(CurveOrder::Quadratic, prev, start)), None)
        }
        CommandKind::SmoothBezierCubic { control2 } => (
            Some(smooth_control(CurveOrder::Cubic, prev, start)),
            Some(cmd.resolve_point(control2, start)),
        ),
        _ => (None, None),
    };

    match cmd.kind {
        CommandKind::Move => Resolved {
            start,
            end,
            control1,
            control2,
            subpath_start: end,
        },
        // Close returns to the sub-path start; it has no end point of its own
        CommandKind::Close => Resolved {
            start,
            end: subpath_start,
            control1,
            control2,
            subpath_start,
        },
        _ => Resolved {
            start,
            end,
            control1,
            control2,
            subpath_start,
        },
    }
}

/// Single left-to-right fold computing the absolute geometry of every command.
pub fn resolve(commands: &[Command]) -> Vec<Resolved> {
    let mut resolved: Vec<Resolved> = Vec::with_capacity(commands.len());
    for (idx, cmd) in commands.iter().enumerate() {
        let prev = idx
            .checked_sub(1)
            .map(|p| (&commands[p], &resolved[p]));
        let r = resolve_step(cmd, prev);
        resolved.push(r);
    }
    tracing::trace!(count = resolved.len(), "resolved path commands");
    resolved
}
