//! Minimal vector path handed to drawing collaborators.
//!
//! Only the commands needed for connectors and markers are modelled; mesh
//! generation happens outside this workspace.

use glam::Vec2;

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path.
    MoveTo(Vec2),
    /// Straight segment from the current point.
    LineTo(Vec2),
    /// Cubic Bezier from the current point.
    CubicTo {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
    /// Full circle sub-path (used for connector markers).
    Circle { center: Vec2, radius: f32 },
    /// Close the current sub-path.
    Close,
}

/// An ordered list of commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Conservative bounds (control points and marker extents included).
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    min = min.min(p);
                    max = max.max(p);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    min = min.min(control1).min(control2).min(to);
                    max = max.max(control1).max(control2).max(to);
                }
                PathCommand::Circle { center, radius } => {
                    min = min.min(center - Vec2::splat(radius));
                    max = max.max(center + Vec2::splat(radius));
                }
                PathCommand::Close => {}
            }
        }
        (min.is_finite() && max.is_finite()).then_some((min, max))
    }
}

/// Incremental builder for [`Path`].
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn circle(&mut self, center: Vec2, radius: f32) -> &mut Self {
        self.commands.push(PathCommand::Circle { center, radius });
        self
    }

    /// Open polyline through `points`; empty input adds nothing.
    pub fn polyline(&mut self, points: &[Vec2]) -> &mut Self {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for p in rest {
                self.line_to(*p);
            }
        }
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn build(&mut self) -> Path {
        Path {
            commands: std::mem::take(&mut self.commands),
        }
    }
}
