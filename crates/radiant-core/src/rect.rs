//! Rectangular chart bounds.

use glam::Vec2;

/// Chart area in chart-local coordinates (`x`, `y` is the bottom-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of the given size anchored at the origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// The shorter side; radial layouts size their radii against it.
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Point at fractional (or absolute, for values above 1) offsets into the rect.
    pub fn resolve_point(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(
            self.x + crate::math::actual_length(fx, self.width),
            self.y + crate::math::actual_length(fy, self.height),
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_point_mixes_fraction_and_absolute() {
        let r = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(r.resolve_point(0.5, 0.5), Vec2::new(110.0, 70.0));
        assert_eq!(r.resolve_point(40.0, 0.0), Vec2::new(50.0, 20.0));
        assert_eq!(r.min_side(), 100.0);
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let r = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert!(r.contains(r.center()));
        assert!(r.contains(r.position()));
        assert!(r.contains(r.position() + r.size()));
        assert!(!r.contains(Vec2::new(9.9, 50.0)));
        assert!(!r.contains(Vec2::new(100.0, 120.1)));
    }
}
