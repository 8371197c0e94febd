//! # Rotating Text
//!
//! A staggered text-rotation widget for terminal UIs.
//!
//! A [`Rotator`] cycles through a list of phrases. Each phrase is segmented
//! into display units (grapheme clusters grouped into words) and every unit
//! gets an entry delay from a [`Stagger`], so the phrase appears as a wave.
//!
//! ## Core Concepts
//!
//! - **Segmenter**: phrase to [`Word`]s, graphemes or code points
//! - **Stagger**: pure delay function over the unit's position in the phrase
//! - **Rotator**: index state machine, advanced by [`Rotator::next`] or a
//!   single ticker thread
//! - **Widget**: [`RotatingText`] draws the current frame as ANSI output
//!
//! ## Example
//!
//! ```rust
//! use rotating_text::{Rotator, RotatorConfig, StaggerFrom};
//!
//! let mut rotator = Rotator::new(
//!     RotatorConfig::new(["hi there 👋", "stay tuned 🔥"])
//!         .with_auto(false)
//!         .with_stagger(StaggerFrom::First, 0.025),
//! )?;
//!
//! assert_eq!(rotator.current(), "hi there 👋");
//! rotator.next();
//! assert_eq!(rotator.current(), "stay tuned 🔥");
//! assert_eq!(rotator.frame().total_units(), 10);
//! # Ok::<(), rotating_text::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod config;
pub mod error;
pub mod ffi;
pub mod rotator;
pub mod segment;
pub mod stagger;
pub mod style;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{Tick, TickerActor};
pub use config::{RotatorConfig, DEFAULT_ROTATION_INTERVAL};
pub use error::{ConfigError, Error, Result};
pub use rotator::{Frame, Rotator, RotatorState, Unit};
pub use segment::{segment, SegmentStrategy, Segmenter, SplitBy, Word};
pub use stagger::{delay, Stagger, StaggerFrom};
pub use style::{Modifiers, Rgb};
pub use terminal::OutputBuffer;
pub use widget::{Rect, RotatingText, RotatingTextConfig, Widget};
