use std::fmt;
use std::str::FromStr;

use super::arc::{CubicSegment, EllipticalArc};
use super::bbox::BoundsCollector;
use super::command::{Command, CommandKind};
use super::compose::{compose, round_coordinates};
use super::draw::{draw_commands, Graphics};
use super::parser::parse;
use super::resolve::{resolve, Resolved};
use super::transform::transform_commands;
use crate::errors::{Error, Result};
use crate::geometry::{BoundingBox, Matrix};
use crate::PathConfig;

/// Identity of a command within one `Path`, stable across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(u32);

/// An editable sequence of path commands.
///
/// Structural edits leave the path "dirty"; `resolve()` must be called
/// before reading absolute geometry, so that a batch of edits pays for a
/// single resolution pass. Cloning produces an independent snapshot.
#[derive(Debug, Clone)]
pub struct Path {
    commands: Vec<Command>,
    ids: Vec<CommandId>,
    next_id: u32,
    // `None` when edited since the last resolution
    resolved: Option<Vec<Resolved>>,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// An empty (and trivially resolved) path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            ids: Vec::new(),
            next_id: 0,
            resolved: Some(Vec::new()),
        }
    }

    /// Parse path data; the result is already resolved.
    pub fn parse(data: &str) -> Result<Self> {
        let mut path = Self::from_commands(parse(data)?);
        path.resolve();
        Ok(path)
    }

    /// Build a (dirty) path from existing commands
    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut path = Self::new();
        for cmd in commands {
            path.push(cmd);
        }
        path
    }

    /// True if `data` parses to at least one command
    pub fn check(data: &str) -> bool {
        parse(data).is_ok_and(|cmds| !cmds.is_empty())
    }

    fn alloc_id(&mut self) -> CommandId {
        let id = CommandId(self.next_id);
        self.next_id += 1;
        id
    }

    fn mark_dirty(&mut self) {
        self.resolved = None;
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn ids(&self) -> &[CommandId] {
        &self.ids
    }

    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    pub fn get_by_id(&self, id: CommandId) -> Option<&Command> {
        self.index_of(id).map(|idx| &self.commands[idx])
    }

    pub fn is_dirty(&self) -> bool {
        self.resolved.is_none()
    }

    pub fn index_of(&self, id: CommandId) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    /// Append a command, returning its identity
    pub fn push(&mut self, cmd: Command) -> CommandId {
        let id = self.alloc_id();
        self.commands.push(cmd);
        self.ids.push(id);
        self.mark_dirty();
        id
    }

    /// Remove the command with identity `id`, returning it if present
    pub fn remove(&mut self, id: CommandId) -> Option<Command> {
        let idx = self.index_of(id)?;
        self.ids.remove(idx);
        self.mark_dirty();
        Some(self.commands.remove(idx))
    }

    /// Insert `cmd` after the command `anchor`, or at the end if `anchor`
    /// is not in this path.
    pub fn insert_after(&mut self, anchor: CommandId, cmd: Command) -> CommandId {
        let Some(idx) = self.index_of(anchor) else {
            return self.push(cmd);
        };
        let id = self.alloc_id();
        self.commands.insert(idx + 1, cmd);
        self.ids.insert(idx + 1, id);
        self.mark_dirty();
        id
    }

    /// Replace the command at `index`; the replacement gets a new identity.
    ///
    /// An out-of-range index leaves the path untouched.
    pub fn replace_at(&mut self, index: usize, cmd: Command) -> Result<CommandId> {
        if index >= self.commands.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.commands.len(),
            });
        }
        let id = self.alloc_id();
        self.commands[index] = cmd;
        self.ids[index] = id;
        self.mark_dirty();
        Ok(id)
    }

    /// Run the resolution pass
    pub fn resolve(&mut self) {
        self.resolved = Some(resolve(&self.commands));
    }

    /// Absolute geometry of each command, parallel to `commands()`
    pub fn resolved(&self) -> Result<&[Resolved]> {
        self.resolved.as_deref().ok_or(Error::Unresolved)
    }

    pub fn draw_to(&self, g: &mut impl Graphics, config: &PathConfig) -> Result<()> {
        draw_commands(&self.commands, self.resolved()?, g, config.arc_retry_limit);
        Ok(())
    }

    /// Bounds of the drawn path, or `None` for a path which draws nothing
    pub fn bounding_box(&self, config: &PathConfig) -> Result<Option<BoundingBox>> {
        let mut bounds = BoundsCollector::new();
        self.draw_to(&mut bounds, config)?;
        Ok(bounds.build())
    }

    /// Cubic segments approximating the arc at `index`, or `None` if that
    /// command is not an arc.
    pub fn arc_segments(
        &self,
        index: usize,
        config: &PathConfig,
    ) -> Result<Option<Vec<CubicSegment>>> {
        let resolved = self.resolved()?;
        let (Some(cmd), Some(r)) = (self.commands.get(index), resolved.get(index)) else {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.commands.len(),
            });
        };
        Ok(EllipticalArc::from_command(cmd, r).map(|arc| arc.to_cubics(config.arc_retry_limit)))
    }

    /// Apply `matrix` to every command, keeping each command's encoding
    pub fn transform(&mut self, matrix: &Matrix) -> Result<()> {
        self.resolved()?;
        self.commands = transform_commands(&self.commands, matrix)?;
        self.resolve();
        Ok(())
    }

    /// Replace every `H` / `V` with an equivalent `L`
    pub fn expand_axis_lines(&mut self) -> Result<()> {
        let resolved = self.resolved()?;
        let expanded: Vec<Command> = self
            .commands
            .iter()
            .zip(resolved)
            .map(|(cmd, r)| match cmd.kind {
                CommandKind::LineHorizontal | CommandKind::LineVertical => {
                    cmd.to_line(r.start).unwrap_or(*cmd)
                }
                _ => *cmd,
            })
            .collect();
        self.commands = expanded;
        self.resolve();
        Ok(())
    }

    /// Switch the command at `index` between relative and absolute
    /// encoding without moving it.
    pub fn set_relative(&mut self, index: usize, relative: bool) -> Result<()> {
        let len = self.commands.len();
        let start = self
            .resolved()?
            .get(index)
            .map(|r| r.start)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        let cmd = self.commands[index];
        self.commands[index] = if relative {
            cmd.to_relative(start)
        } else {
            cmd.to_absolute(start)
        };
        self.resolve();
        Ok(())
    }

    /// Round every coordinate to `digits` decimal places
    pub fn round_coordinates(&mut self, digits: usize) {
        self.commands = round_coordinates(&self.commands, digits);
        self.resolve();
    }

    pub fn compose(&self) -> String {
        compose(&self.commands, None)
    }

    pub fn compose_with(&self, config: &PathConfig) -> String {
        compose(&self.commands, config.precision)
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compose())
    }
}
