use crate::geometry::{Point, Size};

/// Curve order, used to decide whether a smooth curve can reflect the
/// previous command's control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveOrder {
    Quadratic,
    Cubic,
}

/// The per-kind payload of a `Command`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandKind {
    Move,
    Line,
    /// Only `end.x` is meaningful
    LineHorizontal,
    /// Only `end.y` is meaningful
    LineVertical,
    BezierQuadratic {
        control: Point,
    },
    BezierCubic {
        control1: Point,
        control2: Point,
    },
    /// Control point is inferred from the previous command
    SmoothBezierQuadratic,
    /// First control point is inferred from the previous command
    SmoothBezierCubic {
        control2: Point,
    },
    Arc {
        radius: Size,
        /// x-axis rotation, degrees
        rotation: f64,
        large_arc: bool,
        sweep: bool,
    },
    Close,
}

/// A single path instruction.
///
/// `end` and any control points are offsets from the previous command's
/// resolved point when `relative` is set, and absolute coordinates
/// otherwise. Radii and rotation are never relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    pub relative: bool,
    pub end: Point,
    pub kind: CommandKind,
}

impl Command {
    pub fn new(relative: bool, end: Point, kind: CommandKind) -> Self {
        Self {
            relative,
            end,
            kind,
        }
    }

    pub fn move_to(relative: bool, end: Point) -> Self {
        Self::new(relative, end, CommandKind::Move)
    }

    pub fn line(relative: bool, end: Point) -> Self {
        Self::new(relative, end, CommandKind::Line)
    }

    pub fn horizontal(relative: bool, x: f64) -> Self {
        Self::new(relative, Point::new(x, 0.), CommandKind::LineHorizontal)
    }

    pub fn vertical(relative: bool, y: f64) -> Self {
        Self::new(relative, Point::new(0., y), CommandKind::LineVertical)
    }

    pub fn quadratic(relative: bool, control: Point, end: Point) -> Self {
        Self::new(relative, end, CommandKind::BezierQuadratic { control })
    }

    pub fn cubic(relative: bool, control1: Point, control2: Point, end: Point) -> Self {
        Self::new(relative, end, CommandKind::BezierCubic { control1, control2 })
    }

    pub fn smooth_quadratic(relative: bool, end: Point) -> Self {
        Self::new(relative, end, CommandKind::SmoothBezierQuadratic)
    }

    pub fn smooth_cubic(relative: bool, control2: Point, end: Point) -> Self {
        Self::new(relative, end, CommandKind::SmoothBezierCubic { control2 })
    }

    pub fn arc(
        relative: bool,
        radius: Size,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    ) -> Self {
        Self::new(
            relative,
            end,
            CommandKind::Arc {
                radius,
                rotation,
                large_arc,
                sweep,
            },
        )
    }

    pub fn close(relative: bool) -> Self {
        Self::new(relative, Point::ZERO, CommandKind::Close)
    }

    /// The path-data letter for this command; lower-case when relative.
    pub fn letter(&self) -> char {
        let upper = match self.kind {
            CommandKind::Move => 'M',
            CommandKind::Line => 'L',
            CommandKind::LineHorizontal => 'H',
            CommandKind::LineVertical => 'V',
            CommandKind::BezierQuadratic { .. } => 'Q',
            CommandKind::BezierCubic { .. } => 'C',
            CommandKind::SmoothBezierQuadratic => 'T',
            CommandKind::SmoothBezierCubic { .. } => 'S',
            CommandKind::Arc { .. } => 'A',
            CommandKind::Close => 'Z',
        };
        if self.relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    /// Human-readable name of the command kind
    pub fn name(&self) -> &'static str {
        match self.kind {
            CommandKind::Move => "Move",
            CommandKind::Line => "Line",
            CommandKind::LineHorizontal => "Horizontal Line",
            CommandKind::LineVertical => "Vertical Line",
            CommandKind::BezierQuadratic { .. } => "Quadratic Bezier",
            CommandKind::BezierCubic { .. } => "Cubic Bezier",
            CommandKind::SmoothBezierQuadratic => "Smooth Quadratic Bezier",
            CommandKind::SmoothBezierCubic { .. } => "Smooth Cubic Bezier",
            CommandKind::Arc { .. } => "Arc",
            CommandKind::Close => "Close",
        }
    }

    pub fn curve_order(&self) -> Option<CurveOrder> {
        match self.kind {
            CommandKind::BezierQuadratic { .. } | CommandKind::SmoothBezierQuadratic => {
                Some(CurveOrder::Quadratic)
            }
            CommandKind::BezierCubic { .. } | CommandKind::SmoothBezierCubic { .. } => {
                Some(CurveOrder::Cubic)
            }
            _ => None,
        }
    }

    pub fn is_close(&self) -> bool {
        matches!(self.kind, CommandKind::Close)
    }

    /// `end` with the axis missing from an absolute `H` / `V` filled in
    /// from `prev_end`, the predecessor's resolved point.
    pub fn corrected_end(&self, prev_end: Point) -> Point {
        match self.kind {
            CommandKind::LineHorizontal if !self.relative => Point::new(self.end.x, prev_end.y),
            CommandKind::LineVertical if !self.relative => Point::new(prev_end.x, self.end.y),
            _ => self.end,
        }
    }

    /// Interpret `p` (one of this command's explicit points) against `base`
    pub fn resolve_point(&self, p: Point, base: Point) -> Point {
        if self.relative {
            base + p
        } else {
            p
        }
    }

    /// Equivalent `Line` for line-like commands, keeping the encoding.
    ///
    /// `prev_end` is the predecessor's resolved point, needed to complete
    /// absolute `H` / `V` commands. Returns `None` for anything which is
    /// not a straight line.
    pub fn to_line(&self, prev_end: Point) -> Option<Command> {
        match self.kind {
            CommandKind::Line | CommandKind::LineHorizontal | CommandKind::LineVertical => {
                Some(Command::line(self.relative, self.corrected_end(prev_end)))
            }
            _ => None,
        }
    }

    /// Re-encode as relative to `start` without changing the geometry.
    pub fn to_relative(&self, start: Point) -> Command {
        if self.relative {
            return *self;
        }
        self.reencode(true, |p| p - start, start)
    }

    /// Re-encode as absolute (given the resolved `start`) without changing
    /// the geometry.
    pub fn to_absolute(&self, start: Point) -> Command {
        if !self.relative {
            return *self;
        }
        self.reencode(false, |p| p + start, start)
    }

    fn reencode(&self, relative: bool, f: impl Fn(Point) -> Point, start: Point) -> Command {
        let end = match self.kind {
            CommandKind::Close => self.end,
            // only one axis is stored; the other stays zero
            CommandKind::LineHorizontal => Point::new(f(Point::new(self.end.x, start.y)).x, 0.),
            CommandKind::LineVertical => Point::new(0., f(Point::new(start.x, self.end.y)).y),
            _ => f(self.end),
        };
        let kind = match self.kind {
            CommandKind::BezierQuadratic { control } => CommandKind::BezierQuadratic {
                control: f(control),
            },
            CommandKind::BezierCubic { control1, control2 } => CommandKind::BezierCubic {
                control1: f(control1),
                control2: f(control2),
            },
            CommandKind::SmoothBezierCubic { control2 } => CommandKind::SmoothBezierCubic {
                control2: f(control2),
            },
            other => other,
        };
        Command::new(relative, end, kind)
    }

    /// Explicit points of this command in parameter order, excluding
    /// any unused axis of `H` / `V`.
    pub fn points(&self) -> Vec<Point> {
        match self.kind {
            CommandKind::Close => vec![],
            CommandKind::BezierQuadratic { control } => vec![control, self.end],
            CommandKind::BezierCubic { control1, control2 } => vec![control1, control2, self.end],
            CommandKind::SmoothBezierCubic { control2 } => vec![control2, self.end],
            _ => vec![self.end],
        }
    }

    /// Round every coordinate-bearing field to `digits` decimal places.
    ///
    /// The exact stored value is rounded to the nearest decimal with the
    /// requested digits, so 1.005 (stored as 1.00499999999999989...)
    /// rounds to 1.0 at two digits.
    pub fn rounded(&self, digits: usize) -> Command {
        let r = |v: f64| round_value(v, digits);
        let rp = |p: Point| Point::new(r(p.x), r(p.y));
        let kind = match self.kind {
            CommandKind::BezierQuadratic { control } => CommandKind::BezierQuadratic {
                control: rp(control),
            },
            CommandKind::BezierCubic { control1, control2 } => CommandKind::BezierCubic {
                control1: rp(control1),
                control2: rp(control2),
            },
            CommandKind::SmoothBezierCubic { control2 } => CommandKind::SmoothBezierCubic {
                control2: rp(control2),
            },
            CommandKind::Arc {
                radius,
                rotation,
                large_arc,
                sweep,
            } => CommandKind::Arc {
                radius: Size::new(r(radius.width), r(radius.height)),
                rotation: r(rotation),
                large_arc,
                sweep,
            },
            other => other,
        };
        Command::new(self.relative, rp(self.end), kind)
    }
}

/// Round to `digits` decimal places; see `Command::rounded`.
pub fn round_value(v: f64, digits: usize) -> f64 {
    // adding 0.0 normalises -0.0
    format!("{v:.digits$}").parse::<f64>().unwrap_or(v) + 0.
}
