//! Widgets: terminal presentation of a rotator.
//!
//! [`RotatingText`] owns a [`Rotator`](crate::Rotator) and draws its current
//! frame. Drive it from an event loop:
//!
//! ```rust,ignore
//! let mut widget = RotatingText::new(Rect::new(2, 1, 40, 1), rotator);
//! widget.mount()?;
//! loop {
//!     widget.tick(Instant::now());
//!     if widget.needs_redraw() {
//!         widget.render(&mut out);
//!         widget.clear_redraw();
//!     }
//! }
//! ```

mod rotating_text;
mod traits;

pub use rotating_text::{RotatingText, RotatingTextConfig};
pub use traits::{Rect, Widget};
