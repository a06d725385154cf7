//! Radiant animation
//!
//! Progress tracking for chart series animations. A series owns one
//! [`AnimationController`], which in turn owns a [`ProgressTracker`] for each
//! of the four phases (fade-in, fade-out, change, addition). At most one phase
//! is active at a time.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use radiant_anim::*;
//!
//! let mut anim = AnimationController::new(
//!     AnimationConfig::default().with_type(AnimationType::Clockwise),
//! );
//! anim.start_fade_in();
//! anim.init_progress(0.0, 360.0);
//!
//! anim.tick(FrameTick::unscaled(Duration::from_millis(500)));
//! assert!((anim.current_detail() - 180.0).abs() < 1e-3);
//! assert!(anim.check_detail_break(200.0));
//! ```

mod clock;
mod controller;
mod easing;
mod info;
mod interaction;
mod tracker;
mod types;

pub use clock::*;
pub use controller::*;
pub use easing::*;
pub use info::*;
pub use interaction::*;
pub use tracker::*;
pub use types::*;
