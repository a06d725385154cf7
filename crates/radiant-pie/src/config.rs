//! Pie series configuration.

use glam::Vec2;

/// How values map onto radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoseType {
    /// Constant radius; the angle encodes the value.
    #[default]
    None,
    /// Angle and radius both encode the value.
    Radius,
    /// Equal angles; only the radius encodes the value.
    Area,
}

impl RoseType {
    pub fn is_rose(&self) -> bool {
        !matches!(self, RoseType::None)
    }
}

/// Where a sector's label sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPosition {
    /// Outside the ring, connected by a leader line.
    #[default]
    Outside,
    /// Mid-radius inside the sector.
    Inside,
    /// The series center.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelConfig {
    pub show: bool,
    pub position: LabelPosition,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            show: true,
            position: LabelPosition::Outside,
        }
    }
}

impl LabelConfig {
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn with_position(mut self, position: LabelPosition) -> Self {
        self.position = position;
        self
    }
}

/// Shape of a leader line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineType {
    #[default]
    BrokenLine,
    Curve,
    HorizontalLine,
}

/// Leader line settings for outside labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLineConfig {
    pub show: bool,
    pub line_type: LineType,
    /// Radial length from the sector edge to the label anchor.
    pub line_length1: f32,
    /// Horizontal run past the label anchor.
    pub line_length2: f32,
    pub line_width: f32,
}

impl Default for LabelLineConfig {
    fn default() -> Self {
        Self {
            show: true,
            line_type: LineType::BrokenLine,
            line_length1: 25.0,
            line_length2: 15.0,
            line_width: 1.0,
        }
    }
}

impl LabelLineConfig {
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }

    pub fn with_lengths(mut self, length1: f32, length2: f32) -> Self {
        self.line_length1 = length1;
        self.line_length2 = length2;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}

/// Layout settings of a pie series.
///
/// `center` and `radius` follow the usual length rule: components in
/// `[0, 1]` are fractions of the chart extent (width/height for the center,
/// the shorter side for radii), anything larger is absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieConfig {
    pub rose_type: RoseType,
    /// Smallest sweep in degrees a visible sector may have; 0 disables.
    pub min_angle: f32,
    /// Gap between sectors, consumed by the drawing side.
    pub gap: f32,
    pub round_cap: bool,
    pub clockwise: bool,
    /// Start angle in degrees, 0 pointing up.
    pub start_angle: f32,
    /// Push selected sectors outward by `offset`.
    pub click_offset: bool,
    pub offset: f32,
    pub center: Vec2,
    /// Inside and outside radius.
    pub radius: Vec2,
    pub label: LabelConfig,
    pub label_line: LabelLineConfig,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            rose_type: RoseType::None,
            min_angle: 0.0,
            gap: 0.0,
            round_cap: false,
            clockwise: true,
            start_angle: 0.0,
            click_offset: true,
            offset: 5.0,
            center: Vec2::new(0.5, 0.5),
            radius: Vec2::new(0.0, 0.35),
            label: LabelConfig::default(),
            label_line: LabelLineConfig::default(),
        }
    }
}

impl PieConfig {
    pub fn with_rose_type(mut self, rose_type: RoseType) -> Self {
        self.rose_type = rose_type;
        self
    }

    pub fn with_min_angle(mut self, min_angle: f32) -> Self {
        self.min_angle = min_angle;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_round_cap(mut self, round_cap: bool) -> Self {
        self.round_cap = round_cap;
        self
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    pub fn with_start_angle(mut self, start_angle: f32) -> Self {
        self.start_angle = start_angle;
        self
    }

    pub fn with_click_offset(mut self, enable: bool, offset: f32) -> Self {
        self.click_offset = enable;
        self.offset = offset;
        self
    }

    pub fn with_center(mut self, x: f32, y: f32) -> Self {
        self.center = Vec2::new(x, y);
        self
    }

    pub fn with_radius(mut self, inside: f32, outside: f32) -> Self {
        self.radius = Vec2::new(inside, outside);
        self
    }

    pub fn with_label(mut self, label: LabelConfig) -> Self {
        self.label = label;
        self
    }

    pub fn with_label_line(mut self, label_line: LabelLineConfig) -> Self {
        self.label_line = label_line;
        self
    }

    /// Angle the first sector starts at.
    pub fn effective_start_angle(&self) -> f32 {
        if self.clockwise {
            (self.start_angle + 360.0) % 360.0
        } else {
            360.0 - self.start_angle
        }
    }
}
