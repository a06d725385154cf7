//! Per-frame layout output.

use glam::Vec2;

/// Geometry of the whole series for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesContext {
    pub center: Vec2,
    /// Angle the first sector starts at.
    pub start_angle: f32,
    pub inside_radius: f32,
    pub outside_radius: f32,
    /// Largest visible value (or the equal share when every value is zero).
    pub data_max: f32,
    /// Degrees distributed over visible sectors before min-angle floors.
    pub total_degree: f32,
    /// Value total the natural shares are measured against.
    pub effective_total: f32,
    /// Selection offset; widens the hit ring by three times this amount.
    pub offset: f32,
}

/// Geometry of one sector for one frame.
///
/// Hidden elements keep a collapsed record at the running start angle so
/// indices stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementContext {
    pub visible: bool,
    pub start_angle: f32,
    pub to_angle: f32,
    pub half_angle: f32,
    /// End of the revealed part of the sector.
    pub current_angle: f32,
    pub inside_radius: f32,
    pub outside_radius: f32,
    /// Radial displacement of a selected sector.
    pub offset_radius: f32,
    /// Center the sector is drawn around (moved along `half_angle` when offset).
    pub offset_center: Vec2,
    /// Mid-radius point along `half_angle`.
    pub position: Vec2,
    pub label_position: Vec2,
    pub highlight: bool,
    pub selected: bool,
    pub can_show_label: bool,
}

impl ElementContext {
    pub(crate) fn collapsed(start_angle: f32, center: Vec2) -> Self {
        Self {
            start_angle,
            to_angle: start_angle,
            half_angle: start_angle,
            current_angle: start_angle,
            offset_center: center,
            position: center,
            label_position: center,
            ..Self::default()
        }
    }

    #[inline]
    pub fn sweep(&self) -> f32 {
        self.to_angle - self.start_angle
    }

    /// Part of the sweep the drawing side should fill this frame.
    pub fn revealed_sweep(&self) -> f32 {
        (self.current_angle - self.start_angle).clamp(0.0, self.sweep().max(0.0))
    }

    #[inline]
    pub fn contains_angle(&self, angle: f32) -> bool {
        angle >= self.start_angle && angle <= self.to_angle
    }

    #[inline]
    pub fn contains_radius(&self, distance: f32) -> bool {
        distance >= self.inside_radius && distance <= self.outside_radius
    }
}

/// Index-addressed element arena plus the series record, rewritten every frame.
#[derive(Debug, Clone, Default)]
pub struct PieLayout {
    pub series: SeriesContext,
    pub elements: Vec<ElementContext>,
}

impl PieLayout {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ElementContext> {
        self.elements.get(index)
    }

    /// Accumulated end angle of the last sector.
    pub fn end_angle(&self) -> f32 {
        self.elements
            .last()
            .map_or(self.series.start_angle, |e| e.to_angle)
    }

    /// Sum of all visible sweeps.
    pub fn total_sweep(&self) -> f32 {
        self.elements.iter().map(ElementContext::sweep).sum()
    }
}
