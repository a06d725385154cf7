//! Radiant Core
//!
//! Shared plumbing for the Radiant chart crates: logging setup, profiling
//! scopes, polar math helpers, layout bounds and a minimal vector path type.

pub mod logging;
pub mod math;
pub mod path;
pub mod profiling;
pub mod rect;

pub use path::{Path, PathBuilder, PathCommand};
pub use rect::Rect;
