//! Vector path commands and serialization
//!
//! The external output of a generation call: an ordered command list whose
//! `Display` form is the space-separated token stream `M x y`, `Q cx cy x y`,
//! `Z`. Numbers print as shortest round-trip decimals. A path is immutable
//! once produced; builder methods are crate-private.

use std::fmt;

use glam::DVec2;

/// A single path drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path at a point
    MoveTo(DVec2),
    /// Quadratic curve through a control point to a destination
    QuadTo { ctrl: DVec2, to: DVec2 },
    /// Close the current sub-path
    Close,
}

impl PathCommand {
    /// The point this command ends at, if any
    pub fn endpoint(&self) -> Option<DVec2> {
        match self {
            PathCommand::MoveTo(p) => Some(*p),
            PathCommand::QuadTo { to, .. } => Some(*to),
            PathCommand::Close => None,
        }
    }

    /// True if every coordinate in the command is finite
    pub fn is_finite(&self) -> bool {
        match self {
            PathCommand::MoveTo(p) => p.is_finite(),
            PathCommand::QuadTo { ctrl, to } => ctrl.is_finite() && to.is_finite(),
            PathCommand::Close => true,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::QuadTo { ctrl, to } => {
                write!(f, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
            }
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// An ordered, immutable command sequence
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn move_to(&mut self, p: DVec2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub(crate) fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub(crate) fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// The command sequence in draw order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point a command ends at, in draw order
    pub fn endpoints(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.commands.iter().filter_map(PathCommand::endpoint)
    }

    /// True if every coordinate in the path is finite
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(PathCommand::is_finite)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
