//! Radiant pie
//!
//! Progressive pie and rose chart layout. Each frame a [`PieSeries`] ticks its
//! [`AnimationController`](radiant_anim::AnimationController), lays its items
//! out with the [`RadialLayoutEngine`] into an index-addressed [`PieLayout`],
//! and answers pointer queries through the [`HitTester`]. Outside labels get
//! leader lines from the [`LabelLineRouter`]. Drawing is left to the caller.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use radiant_anim::{AnimationConfig, FrameTick};
//! use radiant_core::Rect;
//! use radiant_pie::{PieConfig, PieItem, PieSeries};
//!
//! let mut pie = PieSeries::new(PieConfig::default(), AnimationConfig::default())
//!     .with_items([PieItem::new("a", 10.0), PieItem::new("b", 30.0)]);
//! pie.fade_in();
//!
//! let bounds = Rect::from_size(400.0, 300.0);
//! pie.update(FrameTick::unscaled(Duration::from_millis(16)), bounds);
//! assert_eq!(pie.elements().len(), 2);
//! assert!(pie.needs_redraw());
//! ```

mod config;
mod context;
mod error;
mod hit_test;
mod label_line;
mod layout;
mod series;

pub use config::*;
pub use context::*;
pub use error::*;
pub use hit_test::*;
pub use label_line::*;
pub use layout::*;
pub use series::*;
