//! Per-phase animation configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::AnimationPhase;

/// Per-element timing callback (element index -> duration).
#[derive(Clone)]
pub struct IndexFn(Arc<dyn Fn(usize) -> Duration + Send + Sync>);

impl IndexFn {
    pub fn new(f: impl Fn(usize) -> Duration + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, index: usize) -> Duration {
        (self.0)(index)
    }
}

impl fmt::Debug for IndexFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IndexFn(..)")
    }
}

/// Timing configuration of one phase.
#[derive(Debug, Clone)]
pub struct AnimationInfo {
    /// A disabled phase ignores start requests.
    pub enable: bool,
    pub duration: Duration,
    /// Fixed delay before progress starts; overridden by `delay_function`.
    pub delay: Duration,
    pub delay_function: Option<IndexFn>,
    pub duration_function: Option<IndexFn>,
    /// Run from the destination back toward the start.
    pub reverse: bool,
}

impl Default for AnimationInfo {
    fn default() -> Self {
        Self {
            enable: true,
            duration: Duration::from_millis(1000),
            delay: Duration::ZERO,
            delay_function: None,
            duration_function: None,
            reverse: false,
        }
    }
}

impl AnimationInfo {
    /// Defaults for the given phase: fade-out runs reversed, change and
    /// addition are shorter.
    pub fn for_phase(phase: AnimationPhase) -> Self {
        match phase {
            AnimationPhase::FadeIn => Self::default(),
            AnimationPhase::FadeOut => Self {
                reverse: true,
                ..Self::default()
            },
            AnimationPhase::Change | AnimationPhase::Addition => Self {
                duration: Duration::from_millis(500),
                ..Self::default()
            },
        }
    }

    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_delay_function(
        mut self,
        f: impl Fn(usize) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay_function = Some(IndexFn::new(f));
        self
    }

    pub fn with_duration_function(
        mut self,
        f: impl Fn(usize) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.duration_function = Some(IndexFn::new(f));
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Delay before the whole phase starts progressing.
    pub fn phase_delay(&self) -> Duration {
        self.delay_for(0)
    }

    /// Delay for one element of an item animation.
    pub fn delay_for(&self, index: usize) -> Duration {
        match &self.delay_function {
            Some(f) => f.call(index),
            None => self.delay,
        }
    }

    /// Duration for one element of an item animation.
    pub fn duration_for(&self, index: usize) -> Duration {
        match &self.duration_function {
            Some(f) => f.call(index),
            None => self.duration,
        }
    }
}
