use super::command::{Command, CommandKind};
use super::resolve::resolve;
use crate::errors::{Error, Result};
use crate::geometry::{Matrix, Point};

/// Apply `matrix` to every command, keeping each command's encoding.
///
/// Absolute points are mapped through the full matrix; relative offsets
/// only through its linear part, which is the same as transforming the
/// absolute point and subtracting the transformed base. A leading command
/// has no transformed base: its relative points are offsets from the
/// origin and are mapped through the full matrix. `H` / `V` become `L`
/// when their axis is not kept.
pub fn transform_commands(commands: &[Command], matrix: &Matrix) -> Result<Vec<Command>> {
    if !matrix.is_finite() {
        return Err(Error::InvalidTransform(format!("non-finite matrix {matrix:?}")));
    }
    let resolved = resolve(commands);
    let out = commands
        .iter()
        .zip(&resolved)
        .enumerate()
        .map(|(idx, (cmd, r))| transform_command(cmd, r.start, idx == 0, matrix))
        .collect();
    tracing::debug!(count = commands.len(), ?matrix, "transformed path");
    Ok(out)
}

/// Transform a single command whose predecessor resolved to `start`
/// (in untransformed coordinates). `leading` marks the first command,
/// whose base is the origin in both coordinate systems.
fn transform_command(cmd: &Command, start: Point, leading: bool, m: &Matrix) -> Command {
    // the origin base of a leading command does not follow the translation
    let base_moves = leading && m.apply(start) != start;
    let cmd = match cmd.kind {
        CommandKind::LineHorizontal if base_moves || !m.preserves_horizontal() => {
            cmd.to_line(start).unwrap_or(*cmd)
        }
        CommandKind::LineVertical if base_moves || !m.preserves_vertical() => {
            cmd.to_line(start).unwrap_or(*cmd)
        }
        _ => *cmd,
    };
    let tp = |p: Point| {
        if cmd.relative && !leading {
            m.apply_vector(p)
        } else {
            m.apply(p)
        }
    };

    let end = match cmd.kind {
        CommandKind::Close => cmd.end,
        // the unused axis stays zero
        CommandKind::LineHorizontal => Point::new(tp(cmd.corrected_end(start)).x, 0.),
        CommandKind::LineVertical => Point::new(0., tp(cmd.corrected_end(start)).y),
        _ => tp(cmd.end),
    };
    let kind = match cmd.kind {
        CommandKind::BezierQuadratic { control } => CommandKind::BezierQuadratic {
            control: tp(control),
        },
        CommandKind::BezierCubic { control1, control2 } => CommandKind::BezierCubic {
            control1: tp(control1),
            control2: tp(control2),
        },
        CommandKind::SmoothBezierCubic { control2 } => CommandKind::SmoothBezierCubic {
            control2: tp(control2),
        },
        CommandKind::Arc {
            radius,
            rotation,
            large_arc,
            sweep,
        } => {
            let (sx, sy) = m.scale_factors();
            let rotation = if radius.is_circular() {
                rotation
            } else {
                (rotation + m.rotation_degrees()) % 360.
            };
            CommandKind::Arc {
                radius: radius.scale(sx, sy),
                rotation,
                large_arc,
                // a reflection reverses the winding direction
                sweep: sweep != m.is_reflection(),
            }
        }
        other => other,
    };
    Command::new(cmd.relative, end, kind)
}
