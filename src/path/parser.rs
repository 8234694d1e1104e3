use super::command::Command;
use super::syntax::{PathSyntax, SvgPathSyntax};
use crate::errors::{Error, Result};
use crate::geometry::{Point, Size};

/// Number of parameters consumed by one instance of `command`
fn arity(command: char) -> usize {
    match command.to_ascii_uppercase() {
        'M' | 'L' | 'T' => 2,
        'H' | 'V' => 1,
        'C' => 6,
        'S' | 'Q' => 4,
        'A' => 7,
        _ => 0,
    }
}

/// Read all parameters following a command letter, up to the next
/// command letter or end of data.
fn read_params(tokens: &mut impl PathSyntax, command: char) -> Result<Vec<f64>> {
    let is_arc = command.eq_ignore_ascii_case(&'a');
    let mut params = Vec::new();
    while !tokens.at_end() && !tokens.at_command() {
        // arc flags may be written without separators, e.g. `a5 5 0 105 5`
        let value = if is_arc && matches!(params.len() % 7, 3 | 4) {
            if tokens.read_flag()? {
                1.
            } else {
                0.
            }
        } else {
            tokens.read_number()?
        };
        if !value.is_finite() {
            return Err(Error::NonFiniteParameter(value.to_string()));
        }
        params.push(value);
    }
    Ok(params)
}

/// Build one `Command` per arity-sized chunk of `params`.
fn build_commands(command: char, params: &[f64], out: &mut Vec<Command>) -> Result<()> {
    let relative = command.is_ascii_lowercase();
    let arity = arity(command);
    let count_ok = if arity == 0 {
        params.is_empty()
    } else {
        !params.is_empty() && params.len() % arity == 0
    };
    if !count_ok {
        return Err(Error::InvalidParameterCount {
            command,
            count: params.len(),
        });
    }
    if arity == 0 {
        out.push(Command::close(relative));
        return Ok(());
    }

    for (idx, p) in params.chunks_exact(arity).enumerate() {
        let cmd = match command.to_ascii_uppercase() {
            // "If a moveto is followed by multiple pairs of coordinates,
            // the subsequent pairs are treated as implicit lineto commands."
            'M' if idx == 0 => Command::move_to(relative, Point::new(p[0], p[1])),
            'M' | 'L' => Command::line(relative, Point::new(p[0], p[1])),
            'H' => Command::horizontal(relative, p[0]),
            'V' => Command::vertical(relative, p[0]),
            'C' => Command::cubic(
                relative,
                Point::new(p[0], p[1]),
                Point::new(p[2], p[3]),
                Point::new(p[4], p[5]),
            ),
            'S' => Command::smooth_cubic(relative, Point::new(p[0], p[1]), Point::new(p[2], p[3])),
            'Q' => Command::quadratic(relative, Point::new(p[0], p[1]), Point::new(p[2], p[3])),
            'T' => Command::smooth_quadratic(relative, Point::new(p[0], p[1])),
            'A' => Command::arc(
                relative,
                Size::new(p[0], p[1]),
                p[2],
                p[3] != 0.,
                p[4] != 0.,
                Point::new(p[5], p[6]),
            ),
            _ => return Err(Error::UnknownCommand(command)),
        };
        out.push(cmd);
    }
    Ok(())
}

/// Parse SVG path data into a list of commands.
///
/// Parsing is all-or-nothing: any error discards everything parsed so far.
/// Blank input yields an empty list.
pub fn parse(data: &str) -> Result<Vec<Command>> {
    let mut tokens = SvgPathSyntax::new(data);
    let mut commands = Vec::new();

    tokens.skip_whitespace();
    while !tokens.at_end() {
        let command = tokens.read_command()?;
        let params = read_params(&mut tokens, command)?;
        build_commands(command, &params, &mut commands)?;
    }
    tracing::debug!(count = commands.len(), "parsed path data");
    Ok(commands)
}
