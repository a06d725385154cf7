//! Single-phase progress tracking.

use std::time::Duration;

use ahash::HashMap;

use crate::{AnimationClock, AnimationInfo, AnimationPhase, PhaseState};

/// Numeric progress of one phase.
///
/// Owned and mutated only by its [`ProgressTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationContext {
    pub curr_progress: f32,
    pub dest_progress: f32,
    /// Span of the progress domain (`dest - curr` at init time).
    pub total_progress: f32,
    /// Symbol size progress; `None` until the first symbol check.
    pub size_progress: Option<f32>,
    pub curr_point_index: usize,
    pub dest_point_index: usize,
    pub current_path_distance: f32,
    domain_start: f32,
    domain_end: f32,
}

impl AnimationContext {
    /// Fresh context with the default `0 -> 1` domain.
    fn fresh(keep_point_index: Option<usize>) -> Self {
        Self {
            dest_progress: 1.0,
            domain_end: 1.0,
            curr_point_index: keep_point_index.unwrap_or(0),
            ..Self::default()
        }
    }

    /// Fraction of the domain currently revealed, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        let span = self.domain_end - self.domain_start;
        if span.abs() <= f32::EPSILON {
            return 1.0;
        }
        ((self.curr_progress - self.domain_start) / span).clamp(0.0, 1.0)
    }
}

/// Drives one phase through `Idle -> Delaying -> Running -> Ended`.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    phase: AnimationPhase,
    info: AnimationInfo,
    state: PhaseState,
    initialized: bool,
    context: AnimationContext,
    clock: AnimationClock,
    items: HashMap<usize, f32>,
}

impl ProgressTracker {
    pub fn new(phase: AnimationPhase, info: AnimationInfo) -> Self {
        Self {
            phase,
            info,
            state: PhaseState::Idle,
            initialized: false,
            context: AnimationContext::default(),
            clock: AnimationClock::new(),
            items: HashMap::default(),
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn info(&self) -> &AnimationInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut AnimationInfo {
        &mut self.info
    }

    pub fn state(&self) -> PhaseState {
        self.state
    }

    pub fn context(&self) -> &AnimationContext {
        &self.context
    }

    pub(crate) fn context_mut(&mut self) -> &mut AnimationContext {
        &mut self.context
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn is_started(&self) -> bool {
        self.state != PhaseState::Idle
    }

    pub fn is_ended(&self) -> bool {
        self.state == PhaseState::Ended
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.in_flight()
    }

    pub fn is_in_delay(&self) -> bool {
        self.state == PhaseState::Delaying
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Progress has reached the destination (direction aware).
    pub fn reached_destination(&self) -> bool {
        if self.info.reverse {
            self.context.curr_progress <= self.context.dest_progress
        } else {
            self.context.curr_progress >= self.context.dest_progress
        }
    }

    /// Idle -> Delaying/Running. A tracker that is already started is only
    /// resumed. With `reset == false` the point index of the previous run is
    /// kept so index animations can continue from where they stopped.
    ///
    /// Returns true if the phase actually (re)started.
    pub fn start(&mut self, reset: bool) -> bool {
        if !self.info.enable {
            return false;
        }
        if self.is_in_flight() {
            self.clock.resume();
            return false;
        }
        self.initialized = false;
        self.clock.reset();
        if reset {
            self.context = AnimationContext::fresh(None);
            self.items.clear();
        } else {
            let keep = self.context.curr_point_index;
            let size = self.context.size_progress;
            self.context = AnimationContext::fresh(Some(keep));
            self.context.size_progress = size;
        }
        self.state = if self.info.phase_delay() > Duration::ZERO {
            PhaseState::Delaying
        } else {
            PhaseState::Running
        };
        tracing::debug!(phase = ?self.phase, state = ?self.state, "animation phase started");
        true
    }

    /// Back to Idle, discarding all progress.
    pub fn reset(&mut self) {
        self.state = PhaseState::Idle;
        self.initialized = false;
        self.context = AnimationContext::default();
        self.clock.reset();
        self.items.clear();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    /// Seed the progress domain. Only the first call after a start takes
    /// effect; later calls are ignored until the phase is started again.
    pub fn init(&mut self, curr: f32, dest: f32, dest_point_index: usize) {
        if !self.info.enable || !self.is_in_flight() || self.initialized {
            return;
        }
        self.initialized = true;
        let ctx = &mut self.context;
        ctx.total_progress = dest - curr;
        ctx.dest_point_index = dest_point_index;
        ctx.domain_start = curr;
        ctx.domain_end = dest;
        if self.info.reverse {
            ctx.curr_progress = dest;
            ctx.dest_progress = curr;
        } else {
            ctx.curr_progress = curr;
            ctx.dest_progress = dest;
        }
    }

    /// Force Running/Delaying -> Ended. Returns true on the transition.
    pub fn end(&mut self) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        self.state = PhaseState::Ended;
        self.context.curr_point_index = self.context.dest_point_index;
        tracing::debug!(phase = ?self.phase, "animation phase ended");
        true
    }

    /// Advance by one frame step, using the context's own span.
    ///
    /// Returns true if the phase ended during this tick.
    pub fn tick(&mut self, step: Duration) -> bool {
        let total = self.context.total_progress;
        self.tick_with_total(step, total)
    }

    /// Advance by one frame step where `total` progress units elapse per
    /// configured duration.
    pub fn tick_with_total(&mut self, step: Duration, total: f32) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        let applied = self.clock.advance(step);
        if applied.is_zero() {
            return false;
        }
        let mut running = applied;
        if self.state == PhaseState::Delaying {
            let delay = self.info.phase_delay();
            let elapsed = self.clock.elapsed();
            if elapsed < delay {
                return false;
            }
            running = (elapsed - delay).min(applied);
            self.state = PhaseState::Running;
            tracing::trace!(phase = ?self.phase, "animation delay elapsed");
        }
        if !self.initialized {
            return false;
        }

        let secs = self.info.duration.as_secs_f32();
        let delta = if secs <= 0.0 {
            f32::INFINITY
        } else {
            total.abs() * running.as_secs_f32() / secs
        };
        let ctx = &mut self.context;
        if self.info.reverse {
            ctx.curr_progress -= delta;
            if ctx.curr_progress <= ctx.dest_progress {
                ctx.curr_progress = ctx.dest_progress;
                return self.end();
            }
        } else {
            ctx.curr_progress += delta;
            if ctx.curr_progress >= ctx.dest_progress {
                ctx.curr_progress = ctx.dest_progress;
                return self.end();
            }
        }
        tracing::trace!(phase = ?self.phase, progress = ctx.curr_progress, "animation tick");
        false
    }

    /// Per-element progress from `start` toward `dest` (or back, when
    /// reversed), advanced by `step`. Returns the element's progress and
    /// whether the element has finished.
    pub fn check_item_progress(
        &mut self,
        index: usize,
        dest: f32,
        start: f32,
        step: Duration,
    ) -> (f32, bool) {
        let (from, to) = if self.info.reverse {
            (dest, start)
        } else {
            (start, dest)
        };
        match self.state {
            PhaseState::Idle => return (dest, false),
            PhaseState::Ended => return (to, true),
            PhaseState::Delaying | PhaseState::Running => {}
        }
        if self.clock.elapsed() < self.info.delay_for(index) {
            return (from, false);
        }
        let curr = self.items.entry(index).or_insert(from);
        if self.clock.is_paused() {
            return (*curr, false);
        }
        let secs = self.info.duration_for(index).as_secs_f32();
        if secs <= 0.0 {
            *curr = to;
        } else {
            *curr += (to - from) * step.as_secs_f32() / secs;
        }
        let done = if to >= from { *curr >= to } else { *curr <= to };
        if done {
            *curr = to;
        }
        (*curr, done)
    }

    /// Advance symbol size progress toward `dest` (or down to 0 when reversed).
    pub fn check_symbol(&mut self, dest: f32, step: Duration) {
        if !self.is_in_flight() || self.clock.is_paused() || self.is_in_delay() {
            return;
        }
        let reverse = self.info.reverse;
        let size = self
            .context
            .size_progress
            .get_or_insert(if reverse { dest } else { 0.0 });
        let secs = self.info.duration.as_secs_f32();
        let delta = if secs <= 0.0 {
            f32::INFINITY
        } else {
            dest * step.as_secs_f32() / secs
        };
        *size = if reverse {
            (*size - delta).max(0.0)
        } else {
            (*size + delta).min(dest)
        };
    }
}
