//! Pointer hit testing over a laid-out pie.

use glam::Vec2;
use radiant_core::math::bearing;
use radiant_core::profiling::profile_function;

use crate::PieLayout;

/// Read-only pointer queries against one frame's [`PieLayout`].
#[derive(Debug, Clone, Copy)]
pub struct HitTester<'a> {
    layout: &'a PieLayout,
}

impl<'a> HitTester<'a> {
    pub fn new(layout: &'a PieLayout) -> Self {
        Self { layout }
    }

    /// Index of the sector under `point`, first in order on overlap.
    ///
    /// The coarse ring extends three offsets past the outside radius so that
    /// pushed-out sectors stay reachable. Selected sectors are re-measured from
    /// their offset center; a miss there keeps scanning.
    pub fn locate(&self, point: Vec2) -> Option<usize> {
        profile_function!();
        let series = &self.layout.series;
        let dist = point.distance(series.center);
        let max_radius = series.outside_radius + 3.0 * series.offset;
        if dist < series.inside_radius || dist > max_radius {
            return None;
        }
        let angle = bearing(series.center, point);
        self.layout
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.visible)
            .find(|(_, e)| {
                if !e.contains_angle(angle) && !e.contains_angle(angle + 360.0) {
                    return false;
                }
                let d = if e.selected {
                    point.distance(e.offset_center)
                } else {
                    dist
                };
                e.contains_radius(d)
            })
            .map(|(index, _)| index)
    }

    /// Distance-only check against the series ring.
    pub fn is_pointer_inside(&self, point: Vec2) -> bool {
        let series = &self.layout.series;
        let dist = point.distance(series.center);
        dist >= series.inside_radius && dist <= series.outside_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementContext, SeriesContext};

    fn ring() -> PieLayout {
        let series = SeriesContext {
            center: Vec2::ZERO,
            inside_radius: 10.0,
            outside_radius: 50.0,
            offset: 5.0,
            ..Default::default()
        };
        let sector = |start: f32, to: f32| ElementContext {
            visible: true,
            start_angle: start,
            to_angle: to,
            inside_radius: 10.0,
            outside_radius: 50.0,
            ..Default::default()
        };
        PieLayout {
            series,
            elements: vec![sector(0.0, 90.0), sector(90.0, 360.0)],
        }
    }

    #[test]
    fn test_locate_by_bearing() {
        let layout = ring();
        let hit = HitTester::new(&layout);
        assert_eq!(hit.locate(Vec2::new(20.0, 20.0)), Some(0));
        assert_eq!(hit.locate(Vec2::new(-20.0, -20.0)), Some(1));
    }

    #[test]
    fn test_locate_rejects_outside_ring() {
        let layout = ring();
        let hit = HitTester::new(&layout);
        assert_eq!(hit.locate(Vec2::new(1.0, 1.0)), None);
        assert_eq!(hit.locate(Vec2::new(0.0, 70.0)), None);
        assert!(!hit.is_pointer_inside(Vec2::new(0.0, 60.0)));
        assert!(hit.is_pointer_inside(Vec2::new(0.0, 30.0)));
    }
}
