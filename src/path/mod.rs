//! Path data: parsing, resolution, drawing, transformation and composition.

mod arc;
mod bbox;
mod command;
mod compose;
mod container;
mod draw;
mod parser;
mod resolve;
mod syntax;
mod transform;

pub use arc::{CenterArc, CubicSegment, EllipticalArc};
pub use bbox::BoundsCollector;
pub use command::{round_value, Command, CommandKind, CurveOrder};
pub use compose::{compose, round_coordinates};
pub use container::{CommandId, Path};
pub use draw::{draw_commands, Graphics};
pub use parser::parse;
pub use resolve::{resolve, resolve_step, smooth_control, Resolved};
pub use transform::transform_commands;
