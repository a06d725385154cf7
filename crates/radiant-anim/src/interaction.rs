//! Pointer-interaction tweens (highlight radius easing).

use std::time::Duration;

use crate::Easing;

/// How highlighted elements react.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    pub enable: bool,
    /// Outside radius multiplier applied to highlighted elements.
    pub radius_scale: f32,
    /// Time for a radius to reach a new target.
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            enable: true,
            radius_scale: 1.1,
            duration: Duration::from_millis(250),
            easing: Easing::QuadOut,
        }
    }
}

impl InteractionConfig {
    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    pub fn with_radius_scale(mut self, scale: f32) -> Self {
        self.radius_scale = scale;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Target outside radius for a highlighted element.
    #[inline]
    pub fn highlight_radius(&self, radius: f32) -> f32 {
        radius * self.radius_scale
    }
}

/// One value easing from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueTween {
    from: f32,
    to: f32,
    elapsed: Duration,
    seeded: bool,
}

impl ValueTween {
    /// Current value given the tween duration and easing.
    pub fn value(&self, duration: Duration, easing: Easing) -> f32 {
        if duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / duration.as_secs_f32();
        self.from + (self.to - self.from) * easing.apply(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self, duration: Duration) -> bool {
        self.elapsed >= duration || self.from == self.to
    }
}

/// Index-addressed radius tweens, one per element.
///
/// Each frame the owner calls [`advance`](Self::advance) once and then
/// [`blend`](Self::blend) for every element with its target radius.
#[derive(Debug, Clone, Default)]
pub struct InteractionTweens {
    tweens: Vec<ValueTween>,
    duration: Duration,
    easing: Easing,
}

impl InteractionTweens {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            tweens: Vec::new(),
            duration: config.duration,
            easing: config.easing,
        }
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Grow or shrink to `count` elements; new tweens seed on first blend.
    pub fn resize(&mut self, count: usize) {
        self.tweens.resize(count, ValueTween::default());
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Retime every tween. Elapsed time is clamped to the new duration, so a
    /// zero duration settles everything at its target.
    pub fn set_duration(&mut self, duration: Duration) {
        if duration == self.duration {
            return;
        }
        self.duration = duration;
        for tween in &mut self.tweens {
            tween.elapsed = tween.elapsed.min(duration);
        }
    }

    pub fn advance(&mut self, step: Duration) {
        for tween in &mut self.tweens {
            tween.elapsed = (tween.elapsed + step).min(self.duration);
        }
    }

    /// Current radius of element `index` easing toward `target`.
    ///
    /// A changed target restarts the tween from the current value; the first
    /// target seen for an element is taken immediately.
    pub fn blend(&mut self, index: usize, target: f32) -> f32 {
        if index >= self.tweens.len() {
            self.resize(index + 1);
        }
        let (duration, easing) = (self.duration, self.easing);
        let tween = &mut self.tweens[index];
        if !tween.seeded {
            *tween = ValueTween {
                from: target,
                to: target,
                elapsed: duration,
                seeded: true,
            };
        } else if tween.to != target {
            let current = tween.value(duration, easing);
            *tween = ValueTween {
                from: current,
                to: target,
                elapsed: Duration::ZERO,
                seeded: true,
            };
        }
        tween.value(duration, easing)
    }

    /// True while any element is still easing.
    pub fn is_animating(&self) -> bool {
        self.tweens.iter().any(|t| !t.is_settled(self.duration))
    }

    /// Forget all targets.
    pub fn reset(&mut self) {
        self.tweens.iter_mut().for_each(|t| *t = ValueTween::default());
    }
}
