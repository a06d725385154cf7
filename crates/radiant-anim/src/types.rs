//! Shared animation enums.

/// How a series reveals its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationType {
    /// Resolved by the series to its natural type (see
    /// [`AnimationController::resolve_type`](crate::AnimationController::resolve_type)).
    #[default]
    Default,
    /// Reveal along the x axis.
    LeftToRight,
    /// Every element grows upward on its own.
    BottomToTop,
    /// Every element grows from the center outward on its own.
    InsideOut,
    /// Reveal along the cumulative length of a polyline.
    AlongPath,
    /// Reveal by sweep angle.
    Clockwise,
}

impl AnimationType {
    /// A single shared detail coordinate decides which elements are revealed.
    pub fn is_index(&self) -> bool {
        matches!(
            self,
            AnimationType::LeftToRight | AnimationType::AlongPath | AnimationType::Clockwise
        )
    }

    /// Each element tracks its own progress.
    pub fn is_item(&self) -> bool {
        matches!(self, AnimationType::BottomToTop | AnimationType::InsideOut)
    }
}

/// The four mutually exclusive animation phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    FadeIn = 0,
    FadeOut = 1,
    Change = 2,
    Addition = 3,
}

impl AnimationPhase {
    /// Selection priority, highest first.
    pub const PRIORITY: [AnimationPhase; 4] = [
        AnimationPhase::FadeIn,
        AnimationPhase::FadeOut,
        AnimationPhase::Change,
        AnimationPhase::Addition,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Lifecycle of a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseState {
    #[default]
    Idle,
    /// Started, waiting for its delay to elapse.
    Delaying,
    Running,
    /// Reached its destination; stays here until reset or restarted.
    Ended,
}

impl PhaseState {
    /// Delaying or running.
    #[inline]
    pub fn in_flight(self) -> bool {
        matches!(self, PhaseState::Delaying | PhaseState::Running)
    }
}

/// Phase lifecycle notifications, drained by the owner once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    Started(AnimationPhase),
    Ended(AnimationPhase),
}

/// Which coordinate of a position feeds an index animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailAxis {
    #[default]
    X,
    Y,
}

impl DetailAxis {
    #[inline]
    pub fn pick(self, position: glam::Vec2) -> f32 {
        match self {
            DetailAxis::X => position.x,
            DetailAxis::Y => position.y,
        }
    }
}
