//! Actor: the rotation timer thread.
//!
//! Automatic rotation is paced by a single ticker thread. It communicates
//! with its owner through a bounded crossbeam channel only:
//!
//! ```text
//! ┌───────────────┐      Tick       ┌──────────────┐
//! │ Ticker Thread │ ──────────────▶ │   Rotator    │ advance()
//! └───────────────┘   (bounded 2)   │ (owner loop) │ ─────────▶ Frame
//!        ▲                          └──────────────┘
//!        │ stop + join on drop / interval change
//! ```

mod ticker;

pub use ticker::{Tick, TickerActor};
