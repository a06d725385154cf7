//! A pie series: items, animation and pointer interaction in one place.

use glam::Vec2;
use radiant_anim::{
    AnimationConfig, AnimationController, AnimationType, Easing, FrameTick, InteractionConfig,
    InteractionTweens,
};
use radiant_core::Rect;
use radiant_core::profiling::profile_function;

use crate::{
    ElementContext, HitTester, LabelLineRouter, LabelPosition, LeaderLine, PieConfig, PieError,
    PieLayout, PieResult, RadialLayoutEngine, SectorInput, SeriesContext,
};

bitflags::bitflags! {
    /// What changed since the owner last redrew the series.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SeriesDirty: u8 {
        /// Items, visibility or bounds changed.
        const LAYOUT = 0b0000_0001;
        /// A reveal/fade phase is still running.
        const ANIMATING = 0b0000_0010;
        /// Values are easing toward new targets.
        const DATA_CHANGING = 0b0000_0100;
        /// Highlight radii are easing.
        const INTERACTING = 0b0000_1000;
        /// The hovered element changed.
        const HIGHLIGHT = 0b0001_0000;
        /// The selected element changed.
        const SELECTION = 0b0010_0000;
    }
}

impl SeriesDirty {
    /// Flags that keep the series redrawing on following frames.
    pub fn is_continuous(&self) -> bool {
        self.intersects(Self::ANIMATING | Self::DATA_CHANGING | Self::INTERACTING)
    }
}

/// One data item of a pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieItem {
    pub name: String,
    pub value: f32,
    pub visible: bool,
    /// Explicit outside radius.
    pub radius: Option<f32>,
    /// Selected by configuration (in addition to pointer selection).
    pub selected: bool,
}

impl PieItem {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self {
            name: name.into(),
            value,
            visible: true,
            radius: None,
            selected: false,
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
}

#[derive(Debug, Clone, Copy, Default)]
struct ItemState {
    highlight: bool,
    selected: bool,
}

/// An animated, interactive pie series.
///
/// Call [`update`](Self::update) once per frame before reading geometry,
/// then feed pointer input back; it takes effect on the next update.
#[derive(Debug, Clone)]
pub struct PieSeries {
    config: PieConfig,
    items: Vec<PieItem>,
    states: Vec<ItemState>,
    anim: AnimationController,
    engine: RadialLayoutEngine,
    /// Highlight radius easing.
    radii: InteractionTweens,
    /// Value easing after edits.
    values: InteractionTweens,
    inputs: Vec<SectorInput>,
    pointer_index: Option<usize>,
    last_bounds: Option<Rect>,
    /// Item count changed since the cached layout was built.
    stale: bool,
    dirty: SeriesDirty,
}

impl PieSeries {
    pub fn new(config: PieConfig, animation: AnimationConfig) -> Self {
        let mut anim = AnimationController::new(animation);
        anim.resolve_type(AnimationType::Clockwise);
        let radii = InteractionTweens::new(anim.interaction());
        let values = InteractionTweens::new(
            &InteractionConfig::default()
                .with_duration(anim.change_duration())
                .with_easing(Easing::Linear),
        );
        Self {
            config,
            items: Vec::new(),
            states: Vec::new(),
            anim,
            engine: RadialLayoutEngine::new(),
            radii,
            values,
            inputs: Vec::new(),
            pointer_index: None,
            last_bounds: None,
            stale: false,
            dirty: SeriesDirty::LAYOUT,
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = PieItem>) -> Self {
        self.items.extend(items);
        self.states.resize(self.items.len(), ItemState::default());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &PieConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PieConfig) {
        self.config = config;
        self.dirty |= SeriesDirty::LAYOUT;
    }

    pub fn items(&self) -> &[PieItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&PieItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn animation(&self) -> &AnimationController {
        &self.anim
    }

    pub fn animation_mut(&mut self) -> &mut AnimationController {
        &mut self.anim
    }

    pub fn layout(&self) -> &PieLayout {
        self.engine.cached()
    }

    pub fn elements(&self) -> &[ElementContext] {
        &self.engine.cached().elements
    }

    pub fn series_context(&self) -> &SeriesContext {
        &self.engine.cached().series
    }

    /// Element under the pointer as of the last [`update_pointer`](Self::update_pointer).
    pub fn pointer_index(&self) -> Option<usize> {
        self.pointer_index
    }

    /// Whether element `index` is selected by configuration or pointer.
    pub fn is_selected(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|i| i.selected)
            || self.states.get(index).is_some_and(|s| s.selected)
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.states.get(index).is_some_and(|s| s.highlight)
    }

    pub fn needs_redraw(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Pending flags, clearing everything except continuous work.
    pub fn take_dirty(&mut self) -> SeriesDirty {
        let dirty = self.dirty;
        self.dirty &= SeriesDirty::ANIMATING | SeriesDirty::DATA_CHANGING | SeriesDirty::INTERACTING;
        dirty
    }

    // =========================================================================
    // Edits
    // =========================================================================

    fn check_index(&self, index: usize) -> PieResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(PieError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Set an item's value; the drawn value eases toward it over the change duration.
    pub fn set_value(&mut self, index: usize, value: f32) -> PieResult<()> {
        self.check_index(index)?;
        self.items[index].value = value;
        self.dirty |= SeriesDirty::LAYOUT | SeriesDirty::DATA_CHANGING;
        tracing::debug!(index, value, "pie value changed");
        Ok(())
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) -> PieResult<()> {
        self.check_index(index)?;
        self.items[index].visible = visible;
        self.dirty |= SeriesDirty::LAYOUT;
        Ok(())
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> PieResult<()> {
        self.check_index(index)?;
        self.items[index].selected = selected;
        self.dirty |= SeriesDirty::LAYOUT | SeriesDirty::SELECTION;
        Ok(())
    }

    /// Remove an item. Running radius and value tweens restart from the new targets.
    pub fn remove(&mut self, index: usize) -> PieResult<PieItem> {
        self.check_index(index)?;
        self.states.remove(index);
        self.radii.reset();
        self.values.reset();
        self.pointer_index = None;
        self.stale = true;
        self.dirty |= SeriesDirty::LAYOUT;
        Ok(self.items.remove(index))
    }

    /// Append an item and play the addition phase.
    pub fn push(&mut self, item: PieItem) {
        self.items.push(item);
        self.states.push(ItemState::default());
        self.stale = true;
        self.anim.start_addition();
        self.dirty |= SeriesDirty::LAYOUT;
    }

    pub fn fade_in(&mut self) {
        self.anim.start_fade_in();
        self.dirty |= SeriesDirty::ANIMATING;
    }

    pub fn fade_out(&mut self) {
        self.anim.start_fade_out();
        self.dirty |= SeriesDirty::ANIMATING;
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Advance animation by `frame` and lay the series out inside `bounds`.
    pub fn update(&mut self, frame: FrameTick, bounds: Rect) {
        profile_function!();

        if self.anim.is_enabled() && self.anim.exceeds_threshold(self.items.len()) {
            tracing::warn!(
                count = self.items.len(),
                threshold = self.anim.threshold(),
                "pie element count exceeds animation threshold, disabling animation"
            );
            self.anim.set_enabled(false);
        }
        if self.last_bounds != Some(bounds) {
            self.last_bounds = Some(bounds);
            self.dirty |= SeriesDirty::LAYOUT;
        }

        // Zero once animation is disabled, so edits apply immediately.
        self.values.set_duration(self.anim.change_duration());
        let step = self.anim.resolve_step(frame);
        self.values.advance(step);
        self.radii.advance(step);
        self.anim.init_progress(0.0, 360.0);
        self.anim.tick(frame);

        self.inputs.clear();
        for (index, (item, state)) in self.items.iter().zip(&self.states).enumerate() {
            self.inputs.push(SectorInput {
                value: self.values.blend(index, item.value),
                visible: item.visible,
                radius: item.radius,
                selected: item.selected || state.selected,
                highlight: state.highlight,
            });
        }
        self.engine.layout(
            &self.inputs,
            &self.config,
            bounds,
            &self.anim,
            &mut self.radii,
        );
        self.stale = false;

        self.dirty.set(SeriesDirty::ANIMATING, !self.anim.is_finished());
        self.dirty
            .set(SeriesDirty::DATA_CHANGING, self.values.is_animating());
        self.dirty
            .set(SeriesDirty::INTERACTING, self.radii.is_animating());
    }

    /// Track hover. A pointer outside the ring (or `None`) clears highlight.
    pub fn update_pointer(&mut self, pointer: Option<Vec2>) {
        let index = pointer.and_then(|p| {
            let hit = self.hit_tester()?;
            hit.is_pointer_inside(p).then(|| hit.locate(p)).flatten()
        });

        for (i, state) in self.states.iter_mut().enumerate() {
            state.highlight = index == Some(i);
        }
        if index != self.pointer_index {
            tracing::trace!(from = ?self.pointer_index, to = ?index, "pie hover changed");
            self.pointer_index = index;
            self.dirty |= SeriesDirty::HIGHLIGHT;
        }
    }

    /// Toggle selection of the element under `point`, deselecting the rest.
    ///
    /// Returns the hit element.
    pub fn on_pointer_down(&mut self, point: Vec2) -> Option<usize> {
        let index = self.locate(point)?;
        let mut selected = false;
        for (i, state) in self.states.iter_mut().enumerate() {
            state.selected = i == index && !state.selected;
            selected |= state.selected;
        }
        tracing::debug!(index, selected, "pie selection toggled");
        self.dirty |= SeriesDirty::SELECTION | SeriesDirty::LAYOUT;
        Some(index)
    }

    /// Element under `point`, or `None` until the next update after an
    /// item was added or removed.
    pub fn locate(&self, point: Vec2) -> Option<usize> {
        self.hit_tester()?
            .locate(point)
            .filter(|index| *index < self.items.len())
    }

    fn hit_tester(&self) -> Option<HitTester<'_>> {
        (!self.stale).then(|| HitTester::new(self.engine.cached()))
    }

    /// Leader lines of every element showing an outside label this frame.
    pub fn leader_lines(&self) -> Vec<(usize, LeaderLine)> {
        let label = &self.config.label;
        let line = &self.config.label_line;
        if !label.show || !line.show || label.position != LabelPosition::Outside {
            return Vec::new();
        }
        let layout = self.engine.cached();
        layout
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.visible && e.can_show_label)
            .map(|(i, e)| (i, LabelLineRouter::route(&layout.series, e, line)))
            .collect()
    }
}
