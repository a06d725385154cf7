//! Radial layout: values to sector geometry.

use radiant_anim::{AnimationController, InteractionTweens};
use radiant_core::Rect;
use radiant_core::math::{actual_length, polar_position};
use radiant_core::profiling::profile_function;

use crate::{ElementContext, LabelPosition, PieConfig, PieLayout, RoseType, SeriesContext};

/// Per-element input of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorInput {
    pub value: f32,
    pub visible: bool,
    /// Explicit outside radius (fraction of the shorter chart side, or absolute).
    pub radius: Option<f32>,
    pub selected: bool,
    pub highlight: bool,
}

impl Default for SectorInput {
    fn default() -> Self {
        Self {
            value: 0.0,
            visible: true,
            radius: None,
            selected: false,
            highlight: false,
        }
    }
}

impl SectorInput {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

/// Eases an element's outside radius toward a target.
pub trait RadiusBlender {
    /// Radius to use this frame for element `index` heading to `target`.
    fn blend(&mut self, index: usize, target: f32) -> f32;
}

impl RadiusBlender for InteractionTweens {
    fn blend(&mut self, index: usize, target: f32) -> f32 {
        InteractionTweens::blend(self, index, target)
    }
}

/// Applies every target immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateRadius;

impl RadiusBlender for ImmediateRadius {
    fn blend(&mut self, _index: usize, target: f32) -> f32 {
        target
    }
}

/// Angular budget of one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Shares {
    total_degree: f32,
    effective_total: f32,
    data_max: f32,
    /// Value every element takes when nothing positive is left to divide.
    zero_share: Option<f32>,
    visible_count: usize,
}

impl Shares {
    fn compute(inputs: &[SectorInput], min_angle: f32) -> Self {
        let visible = || inputs.iter().filter(|i| i.visible);
        let visible_count = visible().count();
        let total: f32 = visible().map(|i| i.value).sum();
        let data_max = visible().map(|i| i.value).fold(0.0_f32, f32::max);

        if total <= 0.0 {
            if total < 0.0 {
                tracing::warn!(total, "pie total is negative, falling back to equal shares");
            }
            let share = if inputs.is_empty() {
                0.0
            } else {
                360.0 / inputs.len() as f32
            };
            return Self {
                total_degree: 360.0,
                effective_total: 360.0,
                data_max: share,
                zero_share: Some(share),
                visible_count,
            };
        }

        let mut total_degree = 360.0;
        let mut effective_total = total;
        if min_angle > 0.0 {
            let floor_value = total * min_angle / 360.0;
            for value in visible().map(|i| i.value).filter(|v| *v < floor_value) {
                total_degree -= min_angle;
                effective_total -= value;
            }
        }
        Self {
            total_degree,
            effective_total,
            data_max,
            zero_share: None,
            visible_count,
        }
    }

    fn sweep(&self, value: f32, rose_type: RoseType, min_angle: f32) -> f32 {
        let natural = if rose_type == RoseType::Area {
            if self.visible_count > 0 {
                self.total_degree / self.visible_count as f32
            } else {
                0.0
            }
        } else if self.effective_total > 0.0 {
            self.total_degree * value / self.effective_total
        } else {
            0.0
        };
        if min_angle > 0.0 && natural < min_angle {
            min_angle
        } else {
            natural
        }
    }
}

/// Turns sector inputs into the per-frame [`PieLayout`].
///
/// The arena is reused between frames; every pass overwrites it completely.
#[derive(Debug, Clone, Default)]
pub struct RadialLayoutEngine {
    cache: PieLayout,
}

impl RadialLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Result of the last pass.
    pub fn cached(&self) -> &PieLayout {
        &self.cache
    }

    /// Lay out `inputs` inside `bounds`, revealing only what `anim` has reached.
    ///
    /// Highlight radii are routed through `blender` while interaction is
    /// enabled and no fade is in flight. Once a fade-out has ended nothing is
    /// revealed.
    pub fn layout(
        &mut self,
        inputs: &[SectorInput],
        config: &PieConfig,
        bounds: Rect,
        anim: &AnimationController,
        blender: &mut dyn RadiusBlender,
    ) -> &PieLayout {
        profile_function!();

        let min_side = bounds.min_side();
        let center = bounds.resolve_point(config.center.x, config.center.y);
        let inside = actual_length(config.radius.x, min_side);
        let outside = actual_length(config.radius.y, min_side);
        let shares = Shares::compute(inputs, config.min_angle);
        let start_angle = config.effective_start_angle();

        self.cache.series = SeriesContext {
            center,
            start_angle,
            inside_radius: inside,
            outside_radius: outside,
            data_max: shares.data_max,
            total_degree: shares.total_degree,
            effective_total: shares.effective_total,
            offset: config.offset,
        };

        let interaction = anim.interaction();
        let interact = interaction.enable && !anim.is_fading_in() && !anim.is_fading_out();
        let faded_out = anim.has_faded_out();
        let elements = &mut self.cache.elements;
        elements.clear();
        elements.reserve(inputs.len());

        let mut start_degree = start_angle;
        for (index, input) in inputs.iter().enumerate() {
            if !input.visible {
                elements.push(ElementContext::collapsed(start_degree, center));
                continue;
            }
            let value = shares.zero_share.unwrap_or(input.value);
            let sweep = shares.sweep(value, config.rose_type, config.min_angle);
            let to_angle = start_degree + sweep;
            let half_angle = start_degree + sweep / 2.0;

            let offset = if config.click_offset && input.selected {
                config.offset
            } else {
                0.0
            };
            let mut outside_radius = match input.radius {
                Some(r) if r > 0.0 => actual_length(r, min_side),
                _ if config.rose_type.is_rose() && shares.data_max > 0.0 => {
                    inside + (outside - inside) * value / shares.data_max
                }
                _ => outside,
            } + offset;
            if interact {
                let target = if input.highlight {
                    interaction.highlight_radius(outside_radius)
                } else {
                    outside_radius
                };
                outside_radius = blender.blend(index, target);
            }
            let inside_radius = if offset > 0.0 && inside > 0.0 {
                inside + offset
            } else {
                inside
            };
            let offset_center = if offset > 0.0 {
                polar_position(center, half_angle, offset)
            } else {
                center
            };

            let current_angle = if faded_out {
                start_degree
            } else if anim.check_detail_break(to_angle) {
                anim.current_detail()
            } else {
                to_angle
            };

            let mid_radius = inside + (outside_radius - inside) / 2.0;
            let label_position = match config.label.position {
                LabelPosition::Outside => polar_position(
                    offset_center,
                    half_angle,
                    outside_radius + config.label_line.line_length1,
                ),
                LabelPosition::Inside => polar_position(offset_center, half_angle, mid_radius),
                LabelPosition::Center => center,
            };

            elements.push(ElementContext {
                visible: true,
                start_angle: start_degree,
                to_angle,
                half_angle,
                current_angle,
                inside_radius,
                outside_radius,
                offset_radius: offset,
                offset_center,
                position: polar_position(center, half_angle, mid_radius),
                label_position,
                highlight: input.highlight,
                selected: input.selected,
                can_show_label: current_angle >= half_angle,
            });
            start_degree = to_angle;
        }

        tracing::trace!(
            count = elements.len(),
            end_angle = start_degree,
            "pie layout"
        );
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(values: &[f32]) -> Vec<SectorInput> {
        values.iter().copied().map(SectorInput::new).collect()
    }

    #[test]
    fn test_shares_without_min_angle() {
        let shares = Shares::compute(&inputs(&[10.0, 20.0, 30.0, 40.0]), 0.0);
        assert_eq!(shares.total_degree, 360.0);
        assert_eq!(shares.effective_total, 100.0);
        assert_eq!(shares.data_max, 40.0);
        assert_eq!(shares.zero_share, None);
    }

    #[test]
    fn test_min_angle_pass_is_single_closed_form() {
        let shares = Shares::compute(&inputs(&[1.0, 49.0, 50.0]), 30.0);
        assert_eq!(shares.total_degree, 330.0);
        assert_eq!(shares.effective_total, 99.0);
    }

    #[test]
    fn test_hidden_values_do_not_count() {
        let mut data = inputs(&[10.0, 90.0]);
        data[1].visible = false;
        let shares = Shares::compute(&data, 0.0);
        assert_eq!(shares.effective_total, 10.0);
        assert_eq!(shares.visible_count, 1);
    }

    #[test]
    fn test_non_positive_total_falls_back_to_equal_shares() {
        let shares = Shares::compute(&inputs(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(shares.zero_share, Some(120.0));
        assert_eq!(shares.data_max, 120.0);

        let shares = Shares::compute(&inputs(&[-5.0, 2.0]), 0.0);
        assert_eq!(shares.zero_share, Some(180.0));
    }

    #[test]
    fn test_sweep_floors_at_min_angle() {
        let shares = Shares::compute(&inputs(&[1.0, 1.0, 1.0, 1.0]), 100.0);
        assert!(shares.effective_total <= 0.0);
        assert_eq!(shares.sweep(1.0, RoseType::None, 100.0), 100.0);
        assert_eq!(shares.sweep(1.0, RoseType::Area, 100.0), 100.0);
    }

    #[test]
    fn test_immediate_radius() {
        assert_eq!(ImmediateRadius.blend(3, 42.0), 42.0);
    }
}
