use super::arc::EllipticalArc;
use super::command::{Command, CommandKind};
use super::resolve::Resolved;
use crate::geometry::Point;

/// A drawing consumer, such as a canvas backend.
///
/// Path drawing only ever calls the path-building methods; `fill` and
/// `stroke` are for the caller to invoke once the path is complete.
pub trait Graphics {
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn curve_to(&mut self, control1: Point, control2: Point, p: Point);
    fn quad_to(&mut self, control: Point, p: Point);
    fn close_path(&mut self);

    fn fill(&mut self) {}
    fn stroke(&mut self) {}
}

/// Feed resolved commands to `g`.
///
/// `resolved` must be the resolution of `commands`; arcs are emitted as a
/// sequence of cubic curves.
pub fn draw_commands(
    commands: &[Command],
    resolved: &[Resolved],
    g: &mut impl Graphics,
    retry_limit: u32,
) {
    for (cmd, r) in commands.iter().zip(resolved) {
        match cmd.kind {
            CommandKind::Move => g.move_to(r.end),
            CommandKind::Line | CommandKind::LineHorizontal | CommandKind::LineVertical => {
                g.line_to(r.end)
            }
            CommandKind::BezierQuadratic { .. } | CommandKind::SmoothBezierQuadratic => {
                g.quad_to(r.control1.unwrap_or(r.start), r.end)
            }
            CommandKind::BezierCubic { .. } | CommandKind::SmoothBezierCubic { .. } => g.curve_to(
                r.control1.unwrap_or(r.start),
                r.control2.unwrap_or(r.end),
                r.end,
            ),
            CommandKind::Arc { .. } => {
                let Some(arc) = EllipticalArc::from_command(cmd, r) else {
                    continue;
                };
                if arc.is_straight() {
                    g.line_to(r.end);
                    continue;
                }
                for seg in arc.to_cubics(retry_limit) {
                    g.curve_to(seg.control1, seg.control2, seg.end);
                }
            }
            CommandKind::Close => g.close_path(),
        }
    }
}
