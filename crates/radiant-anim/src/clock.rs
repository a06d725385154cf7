//! Frame time input and the per-phase clock.

use std::time::Duration;

/// Elapsed time for one render tick, as supplied by the host loop.
///
/// `delta` is already multiplied by the host's time scale; `unscaled_delta`
/// is the raw wall-clock delta. Which one drives an animation is decided by
/// [`AnimationConfig::unscaled_time`](crate::AnimationConfig::unscaled_time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTick {
    pub delta: Duration,
    pub unscaled_delta: Duration,
}

impl FrameTick {
    /// Build a tick from a raw delta and a time scale (negative scales clamp to 0).
    pub fn new(raw: Duration, time_scale: f32) -> Self {
        Self {
            delta: raw.mul_f32(time_scale.max(0.0)),
            unscaled_delta: raw,
        }
    }

    /// A tick whose scaled and unscaled deltas are identical.
    pub fn unscaled(delta: Duration) -> Self {
        Self {
            delta,
            unscaled_delta: delta,
        }
    }

    #[inline]
    pub fn resolve(&self, unscaled_time: bool) -> Duration {
        if unscaled_time {
            self.unscaled_delta
        } else {
            self.delta
        }
    }
}

/// Accumulates phase time; frozen while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationClock {
    elapsed: Duration,
    last_step: Duration,
    paused: bool,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `step` and return the time actually applied (zero while paused).
    pub fn advance(&mut self, step: Duration) -> Duration {
        self.last_step = if self.paused { Duration::ZERO } else { step };
        self.elapsed += self.last_step;
        self.last_step
    }

    /// Time since the clock was last reset, excluding paused frames.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The step applied by the most recent [`advance`](Self::advance).
    #[inline]
    pub fn last_step(&self) -> Duration {
        self.last_step
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Zero the elapsed time and clear the pause flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
