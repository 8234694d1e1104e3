use itertools::Itertools;

use super::command::{Command, CommandKind};
use crate::fstr_with;

/// Numeric parameters of `cmd` in path-data order
fn params(cmd: &Command) -> Vec<f64> {
    let p = |pt: crate::geometry::Point| [pt.x, pt.y];
    match cmd.kind {
        CommandKind::Close => vec![],
        CommandKind::LineHorizontal => vec![cmd.end.x],
        CommandKind::LineVertical => vec![cmd.end.y],
        CommandKind::Arc {
            radius,
            rotation,
            large_arc,
            sweep,
        } => vec![
            radius.width,
            radius.height,
            rotation,
            f64::from(u8::from(large_arc)),
            f64::from(u8::from(sweep)),
            cmd.end.x,
            cmd.end.y,
        ],
        _ => cmd.points().into_iter().flat_map(p).collect(),
    }
}

/// Serialize commands into path data, omitting a command letter when it
/// repeats the previous one.
///
/// Move and close letters are always written, since a repeated `M` pair
/// would read back as a line. `precision` limits the number of decimal
/// places; `None` writes the shortest exact form.
pub fn compose(commands: &[Command], precision: Option<usize>) -> String {
    let mut prev_letter = None;
    let mut tokens = Vec::new();
    for cmd in commands {
        let letter = cmd.letter();
        let always = matches!(cmd.kind, CommandKind::Move | CommandKind::Close);
        if always || prev_letter != Some(letter) {
            tokens.push(letter.to_string());
        }
        prev_letter = Some(letter);
        tokens.extend(params(cmd).into_iter().map(|v| fstr_with(v, precision)));
    }
    tokens.iter().join(" ")
}

/// Round every coordinate-bearing field of every command to `digits`
/// decimal places.
pub fn round_coordinates(commands: &[Command], digits: usize) -> Vec<Command> {
    commands.iter().map(|c| c.rounded(digits)).collect()
}
