//! Series-level animation control.

use std::time::Duration;

use glam::Vec2;
use radiant_core::profiling::profile_function;

use crate::{
    AnimationEvent, AnimationInfo, AnimationPhase, AnimationType, DetailAxis, FrameTick,
    InteractionConfig, ProgressTracker,
};

/// Animation settings of one series.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    pub enable: bool,
    pub kind: AnimationType,
    /// Element count above which the owner should disable animation.
    pub threshold: usize,
    /// Drive progress from the unscaled frame delta.
    pub unscaled_time: bool,
    pub interaction: InteractionConfig,
    pub fade_in: AnimationInfo,
    pub fade_out: AnimationInfo,
    pub change: AnimationInfo,
    pub addition: AnimationInfo,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enable: true,
            kind: AnimationType::Default,
            threshold: 2000,
            unscaled_time: false,
            interaction: InteractionConfig::default(),
            fade_in: AnimationInfo::for_phase(AnimationPhase::FadeIn),
            fade_out: AnimationInfo::for_phase(AnimationPhase::FadeOut),
            change: AnimationInfo::for_phase(AnimationPhase::Change),
            addition: AnimationInfo::for_phase(AnimationPhase::Addition),
        }
    }
}

impl AnimationConfig {
    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    pub fn with_type(mut self, kind: AnimationType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_unscaled_time(mut self, unscaled: bool) -> Self {
        self.unscaled_time = unscaled;
        self
    }

    pub fn with_interaction(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    /// Replace the timing of one phase.
    pub fn with_phase(mut self, phase: AnimationPhase, info: AnimationInfo) -> Self {
        match phase {
            AnimationPhase::FadeIn => self.fade_in = info,
            AnimationPhase::FadeOut => self.fade_out = info,
            AnimationPhase::Change => self.change = info,
            AnimationPhase::Addition => self.addition = info,
        }
        self
    }
}

/// Owns the four phase trackers of a series and answers progress queries.
///
/// Starting a phase returns any other non-idle phase to idle, so at most one
/// phase is ever active; [`AnimationPhase::PRIORITY`] decides lookup order.
#[derive(Debug, Clone)]
pub struct AnimationController {
    enable: bool,
    kind: AnimationType,
    threshold: usize,
    unscaled_time: bool,
    interaction: InteractionConfig,
    /// Static preview: everything reports as finished and fully revealed.
    preview: bool,
    phases: [ProgressTracker; 4],
    all_items_ended: bool,
    path_last_pos: Vec2,
    last_step: Duration,
    events: Vec<AnimationEvent>,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl AnimationController {
    pub fn new(config: AnimationConfig) -> Self {
        let AnimationConfig {
            enable,
            kind,
            threshold,
            unscaled_time,
            interaction,
            fade_in,
            fade_out,
            change,
            addition,
        } = config;
        Self {
            enable,
            kind,
            threshold,
            unscaled_time,
            interaction,
            preview: false,
            phases: [
                ProgressTracker::new(AnimationPhase::FadeIn, fade_in),
                ProgressTracker::new(AnimationPhase::FadeOut, fade_out),
                ProgressTracker::new(AnimationPhase::Change, change),
                ProgressTracker::new(AnimationPhase::Addition, addition),
            ],
            all_items_ended: false,
            path_last_pos: Vec2::ZERO,
            last_step: Duration::ZERO,
            events: Vec::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn is_enabled(&self) -> bool {
        self.enable
    }

    pub fn set_enabled(&mut self, enable: bool) {
        self.enable = enable;
    }

    pub fn kind(&self) -> AnimationType {
        self.kind
    }

    /// Replace [`AnimationType::Default`] with the owner's natural type.
    pub fn resolve_type(&mut self, default: AnimationType) {
        if self.kind == AnimationType::Default {
            self.kind = default;
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// True when `count` elements are more than the configured threshold.
    /// Enforcement is up to the caller.
    pub fn exceeds_threshold(&self, count: usize) -> bool {
        count > self.threshold
    }

    pub fn unscaled_time(&self) -> bool {
        self.unscaled_time
    }

    pub fn interaction(&self) -> &InteractionConfig {
        &self.interaction
    }

    pub fn set_preview(&mut self, preview: bool) {
        self.preview = preview;
    }

    pub fn is_index_animation(&self) -> bool {
        self.kind.is_index()
    }

    pub fn is_item_animation(&self) -> bool {
        self.kind.is_item()
    }

    pub fn tracker(&self, phase: AnimationPhase) -> &ProgressTracker {
        &self.phases[phase.index()]
    }

    pub fn tracker_mut(&mut self, phase: AnimationPhase) -> &mut ProgressTracker {
        &mut self.phases[phase.index()]
    }

    /// The single non-idle phase, if any.
    pub fn active_phase(&self) -> Option<AnimationPhase> {
        AnimationPhase::PRIORITY
            .into_iter()
            .find(|p| self.tracker(*p).is_started())
    }

    fn active(&self) -> Option<&ProgressTracker> {
        self.active_phase().map(|p| self.tracker(p))
    }

    fn active_mut(&mut self) -> Option<&mut ProgressTracker> {
        self.active_phase().map(|p| &mut self.phases[p.index()])
    }

    fn in_flight(&self, phase: AnimationPhase) -> bool {
        self.tracker(phase).is_in_flight()
    }

    // =========================================================================
    // Phase control
    // =========================================================================

    fn start_phase(&mut self, phase: AnimationPhase, reset: bool) {
        if !self.enable {
            return;
        }
        if self.tracker(phase).is_in_flight() {
            self.tracker_mut(phase).resume();
            return;
        }
        if !self.tracker(phase).info().enable {
            return;
        }
        for other in AnimationPhase::PRIORITY {
            if other != phase && self.tracker(other).is_started() {
                self.tracker_mut(other).reset();
            }
        }
        self.all_items_ended = false;
        if self.tracker_mut(phase).start(reset) {
            self.events.push(AnimationEvent::Started(phase));
        }
    }

    /// Start fading in from zero; ignored while a fade-out is in flight.
    pub fn start_fade_in(&mut self) {
        if self.in_flight(AnimationPhase::FadeOut) {
            return;
        }
        self.start_phase(AnimationPhase::FadeIn, true);
    }

    /// Start fading out toward zero, interrupting anything else.
    pub fn start_fade_out(&mut self) {
        self.start_phase(AnimationPhase::FadeOut, true);
    }

    /// Start the value-change phase unless a fade is in flight.
    pub fn start_change(&mut self) {
        if self.in_flight(AnimationPhase::FadeIn) || self.in_flight(AnimationPhase::FadeOut) {
            return;
        }
        self.start_phase(AnimationPhase::Change, true);
    }

    /// Start the addition phase unless a fade is in flight. The previous
    /// point index is kept so the reveal continues from the old end.
    pub fn start_addition(&mut self) {
        if self.in_flight(AnimationPhase::FadeIn) || self.in_flight(AnimationPhase::FadeOut) {
            return;
        }
        self.start_phase(AnimationPhase::Addition, false);
    }

    /// Reset the fades and replay whichever phase was active from its beginning.
    pub fn restart(&mut self) {
        let captured = self.active_phase();
        self.reset();
        if let Some(phase) = captured {
            self.tracker_mut(phase).reset();
            self.start_phase(phase, true);
        }
    }

    /// Return fade-in and fade-out to idle.
    pub fn reset(&mut self) {
        self.tracker_mut(AnimationPhase::FadeIn).reset();
        self.tracker_mut(AnimationPhase::FadeOut).reset();
    }

    pub fn pause(&mut self) {
        self.phases.iter_mut().for_each(ProgressTracker::pause);
    }

    pub fn resume(&mut self) {
        self.phases.iter_mut().for_each(ProgressTracker::resume);
    }

    pub fn is_paused(&self) -> bool {
        self.active().is_some_and(ProgressTracker::is_paused)
    }

    /// Item animations report completion of every element through this flag.
    pub fn set_all_items_ended(&mut self, ended: bool) {
        self.all_items_ended = ended;
    }

    /// Events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Progress seeding
    // =========================================================================

    /// Seed the active phase's domain with `curr -> dest`.
    ///
    /// For index animations `dest` is also the element count driving the point
    /// index; a running addition continues from its previous point index.
    pub fn init_progress(&mut self, curr: f32, dest: f32) {
        let Some(phase) = self.active_phase() else {
            return;
        };
        if self.is_index_animation() {
            let last_index = (dest as i64 - 1).max(0) as usize;
            if phase == AnimationPhase::Addition {
                let from = self.tracker(phase).context().curr_point_index as f32;
                self.tracker_mut(phase).init(from, dest, last_index);
            } else {
                self.tracker_mut(AnimationPhase::Addition)
                    .context_mut()
                    .curr_point_index = last_index;
                self.tracker_mut(phase).init(curr, dest, last_index);
            }
        } else {
            self.tracker_mut(phase).init(curr, dest, 0);
        }
    }

    /// Seed the active phase's domain from a polyline.
    ///
    /// The domain runs along `axis` from the first revealed point to the last,
    /// or along the cumulative polyline length for [`AnimationType::AlongPath`].
    pub fn init_progress_path(&mut self, points: &[Vec2], axis: DetailAxis) {
        let Some(phase) = self.active_phase() else {
            return;
        };
        let Some(last) = points.len().checked_sub(1) else {
            return;
        };
        let start_index = if phase == AnimationPhase::Addition {
            let prev = self.tracker(phase).context().curr_point_index;
            if prev >= last { last.saturating_sub(1) } else { prev }
        } else {
            self.tracker_mut(AnimationPhase::Addition)
                .context_mut()
                .curr_point_index = last;
            0
        };
        let start = points[start_index];
        let mut curr = axis.pick(start);
        let mut dest = axis.pick(points[last]);
        if self.kind == AnimationType::AlongPath {
            curr = 0.0;
            dest = 0.0;
            for (i, pair) in points.windows(2).enumerate() {
                dest += pair[0].distance(pair[1]);
                if i + 1 == start_index {
                    curr = dest;
                }
            }
            self.path_last_pos = start;
            self.tracker_mut(phase).context_mut().current_path_distance = curr;
        }
        self.tracker_mut(phase).init(curr, dest, last);
    }

    // =========================================================================
    // Per-frame progress
    // =========================================================================

    /// The frame step this controller would apply (scaled or unscaled).
    pub fn resolve_step(&self, frame: FrameTick) -> Duration {
        frame.resolve(self.unscaled_time)
    }

    /// Advance the active phase by one frame.
    pub fn tick(&mut self, frame: FrameTick) {
        let Some(total) = self.active().map(|t| t.context().total_progress) else {
            self.last_step = Duration::ZERO;
            return;
        };
        self.tick_with_total(frame, total);
    }

    /// Advance the active phase by one frame, moving `total` progress units
    /// per configured duration.
    pub fn tick_with_total(&mut self, frame: FrameTick, total: f32) {
        profile_function!();
        if self.is_item_animation() && self.all_items_ended {
            for phase in AnimationPhase::PRIORITY {
                if self.tracker_mut(phase).end() {
                    self.events.push(AnimationEvent::Ended(phase));
                }
            }
            return;
        }
        let step = self.resolve_step(frame);
        let Some(phase) = self.active_phase() else {
            self.last_step = Duration::ZERO;
            return;
        };
        let tracker = &mut self.phases[phase.index()];
        let ended = tracker.tick_with_total(step, total);
        self.last_step = tracker.clock().last_step();
        if ended {
            self.events.push(AnimationEvent::Ended(phase));
        }
    }

    /// Progress of one element in an item animation, advanced by the last
    /// frame step. Without an active phase the destination is returned as-is.
    pub fn check_item_progress(&mut self, index: usize, dest: f32, start: f32) -> (f32, bool) {
        let step = self.last_step;
        match self.active_mut() {
            Some(tracker) => tracker.check_item_progress(index, dest, start, step),
            None => (dest, false),
        }
    }

    /// Whether an element at `detail` lies beyond the revealed progress.
    pub fn check_detail_break(&self, detail: f32) -> bool {
        if !self.is_index_animation() {
            return false;
        }
        match self.active() {
            Some(tracker) => !self.is_finished() && detail > tracker.context().curr_progress,
            None => false,
        }
    }

    /// Position form of [`check_detail_break`](Self::check_detail_break).
    ///
    /// For [`AnimationType::AlongPath`] positions must be visited in path order;
    /// each call adds the distance from the previous position.
    pub fn check_detail_break_at(&mut self, position: Vec2, axis: DetailAxis) -> bool {
        if !self.is_index_animation() || self.is_finished() {
            return false;
        }
        if self.kind == AnimationType::AlongPath {
            let step = position.distance(self.path_last_pos);
            self.path_last_pos = position;
            let Some(tracker) = self.active_mut() else {
                return false;
            };
            let ctx = tracker.context_mut();
            ctx.current_path_distance += step;
            let distance = ctx.current_path_distance;
            return self.check_detail_break(distance);
        }
        axis.pick(position) > self.current_detail()
    }

    /// Advance fade symbol sizes toward `size` by the last frame step.
    pub fn check_symbol(&mut self, size: f32) {
        let step = self.last_step;
        for phase in [AnimationPhase::FadeIn, AnimationPhase::FadeOut] {
            self.tracker_mut(phase).check_symbol(size, step);
        }
    }

    /// Symbol size to draw for a symbol whose full size is `size`.
    pub fn symbol_size(&self, size: f32) -> f32 {
        if self.preview || !self.enable {
            return size;
        }
        let fade_out = self.tracker(AnimationPhase::FadeOut);
        if self.is_ended() {
            return if fade_out.is_started() { 0.0 } else { size };
        }
        let source = if fade_out.is_started() {
            fade_out
        } else {
            self.tracker(AnimationPhase::FadeIn)
        };
        source.context().size_progress.unwrap_or(0.0)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// True when nothing is left to reveal this frame.
    pub fn is_finished(&self) -> bool {
        if self.preview || !self.enable {
            return true;
        }
        let Some(tracker) = self.active() else {
            return true;
        };
        if tracker.is_ended() {
            return true;
        }
        if self.is_index_animation() {
            tracker.is_initialized() && tracker.reached_destination()
        } else {
            !self.is_item_animation()
        }
    }

    pub fn is_ended(&self) -> bool {
        self.active().is_some_and(ProgressTracker::is_ended)
    }

    pub fn is_in_delay(&self) -> bool {
        self.active().is_some_and(ProgressTracker::is_in_delay)
    }

    /// Current detail coordinate (angle, axis value or path distance).
    pub fn current_detail(&self) -> f32 {
        match self.active() {
            Some(tracker) if self.preview => tracker.context().dest_progress,
            Some(tracker) => tracker.context().curr_progress,
            None => self.tracker(AnimationPhase::FadeIn).context().curr_progress,
        }
    }

    /// Revealed fraction in `[0, 1]`; 1 when disabled, idle or ended.
    pub fn current_rate(&self) -> f32 {
        if self.preview || !self.enable || self.is_ended() {
            return 1.0;
        }
        self.active().map_or(1.0, |t| t.context().fraction())
    }

    /// Integer element index reached by an index animation.
    pub fn current_index(&self) -> Option<usize> {
        if self.preview || !self.enable {
            return None;
        }
        self.active()
            .map(|t| t.context().curr_progress.max(0.0) as usize)
    }

    pub fn change_duration(&self) -> Duration {
        self.enabled_duration(AnimationPhase::Change)
    }

    pub fn addition_duration(&self) -> Duration {
        self.enabled_duration(AnimationPhase::Addition)
    }

    fn enabled_duration(&self, phase: AnimationPhase) -> Duration {
        let info = self.tracker(phase).info();
        if self.enable && info.enable {
            info.duration
        } else {
            Duration::ZERO
        }
    }

    pub fn has_faded_out(&self) -> bool {
        self.enable && self.tracker(AnimationPhase::FadeOut).is_ended()
    }

    pub fn is_fading_in(&self) -> bool {
        self.in_flight(AnimationPhase::FadeIn)
    }

    pub fn is_fading_out(&self) -> bool {
        self.in_flight(AnimationPhase::FadeOut)
    }
}
