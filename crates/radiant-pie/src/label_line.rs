//! Leader lines from sectors to their outside labels.

use glam::Vec2;
use radiant_core::math::angle_between;
use radiant_core::{Path, PathBuilder};

use crate::{ElementContext, LabelLineConfig, LineType, SeriesContext};

/// Lines bending more than this many degrees are drawn as one straight segment.
pub const DIRECT_LINE_ANGLE: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderLineKind {
    /// `[start, end]`.
    Direct,
    /// `[start, elbow, end]`.
    Broken,
    /// `[start, end, control1, control2]`.
    Curve,
    /// `[from, to]`, with a marker circle.
    Horizontal,
}

/// A routed leader line, ready for a line-drawing collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderLine {
    pub kind: LeaderLineKind,
    pub points: Vec<Vec2>,
    /// Marker circle (center, radius) drawn by horizontal lines.
    pub marker: Option<(Vec2, f32)>,
    pub width: f32,
}

impl LeaderLine {
    pub fn to_path(&self) -> Path {
        let mut builder = PathBuilder::new();
        if let Some((center, radius)) = self.marker {
            builder.circle(center, radius);
        }
        match (self.kind, self.points.as_slice()) {
            (LeaderLineKind::Curve, [start, end, c1, c2]) => {
                builder.move_to(*start).cubic_to(*c1, *c2, *end);
            }
            (_, points) => {
                builder.polyline(points);
            }
        }
        builder.build()
    }
}

/// Stateless leader-line routing.
pub struct LabelLineRouter;

impl LabelLineRouter {
    /// Route the leader line of `element` towards its label anchor.
    pub fn route(
        series: &SeriesContext,
        element: &ElementContext,
        config: &LabelLineConfig,
    ) -> LeaderLine {
        let center = series.center;
        let angle = element.half_angle;
        let (sin, cos) = angle.to_radians().sin_cos();
        let dir = Vec2::new(sin, cos);

        let inside = element.inside_radius;
        let outside = element.outside_radius;
        let edge = if config.line_type == LineType::HorizontalLine {
            series.outside_radius
        } else {
            outside
        };
        let radius1 = edge.max(series.inside_radius) - 0.1;
        let radius3 = inside + (outside - inside) / 2.0;

        let pos0 = center + dir * radius3;
        let pos1 = center + dir * radius1;
        let pos2 = element.label_position;

        let circle_radius = config.line_width * 4.0;
        let circle_diff = circle_radius - 0.3;
        let band = angle.rem_euclid(360.0);
        let (band_sin, band_cos, side) = if band < 180.0 {
            (sin, cos, Vec2::X)
        } else {
            let (s, c) = (360.0 - band).to_radians().sin_cos();
            (s, c, Vec2::NEG_X)
        };
        let r4 = (radius1 * radius1 - (band_cos * radius3).powi(2)).max(0.0).sqrt()
            - band_sin * radius3
            + config.line_length1
            - circle_diff;
        let pos6 = pos0 + side * circle_diff;
        let pos4 = pos6 + side * r4;

        let diff = (angle - series.start_angle) % 360.0;
        let is_left = diff > 180.0 || (diff == 0.0 && element.start_angle > 0.0);
        let pos5 = Vec2::new(
            if is_left {
                pos2.x - config.line_length2
            } else {
                pos2.x + config.line_length2
            },
            pos2.y,
        );

        let line = |kind, points| LeaderLine {
            kind,
            points,
            marker: None,
            width: config.line_width,
        };
        if angle_between(pos1 - center, pos2 - pos1) > DIRECT_LINE_ANGLE {
            return line(LeaderLineKind::Direct, vec![pos1, pos5]);
        }
        match config.line_type {
            LineType::BrokenLine => line(LeaderLineKind::Broken, vec![pos1, pos2, pos5]),
            LineType::Curve => line(LeaderLineKind::Curve, vec![pos1, pos5, pos1, pos2]),
            LineType::HorizontalLine => LeaderLine {
                marker: Some((pos0, circle_radius)),
                ..line(LeaderLineKind::Horizontal, vec![pos6, pos4])
            },
        }
    }
}
