//! Rotating Text Widget: staggered phrase rotation in a terminal area.
//!
//! Each unit of the current phrase is drawn once its stagger delay has
//! elapsed since the phrase appeared; until then its columns stay blank so
//! the phrase does not shift while it fills in.

use super::traits::{Rect, Widget};
use crate::error::Result;
use crate::rotator::Rotator;
use crate::segment::SplitBy;
use crate::style::{Modifiers, Rgb};
use crate::terminal::OutputBuffer;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Configuration for the rotating text widget.
#[derive(Debug, Clone)]
pub struct RotatingTextConfig {
    /// Text color.
    pub fg: Rgb,
    /// Background color (`None` keeps the terminal's).
    pub bg: Option<Rgb>,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Default for RotatingTextConfig {
    fn default() -> Self {
        Self {
            fg: Rgb::new(255, 196, 64),
            bg: None,
            modifiers: Modifiers::BOLD,
        }
    }
}

/// A widget that shows a [`Rotator`]'s current phrase with staggered entry.
#[derive(Debug)]
pub struct RotatingText {
    /// The phrase state machine.
    rotator: Rotator,
    /// Widget bounds.
    bounds: Rect,
    /// Configuration.
    config: RotatingTextConfig,
    /// Time the current frame has been on screen, as of the last sync.
    elapsed: Duration,
    /// Units visible as of the last sync.
    visible: usize,
    /// Identity of the frame seen at the last sync.
    seen_frame: (usize, Instant),
    /// Needs redraw flag.
    dirty: bool,
}

impl RotatingText {
    /// Create a new rotating text widget with the given bounds.
    pub fn new(bounds: Rect, rotator: Rotator) -> Self {
        Self::with_config(bounds, rotator, RotatingTextConfig::default())
    }

    /// Create a new rotating text widget with custom configuration.
    pub fn with_config(bounds: Rect, rotator: Rotator, config: RotatingTextConfig) -> Self {
        let frame = rotator.frame();
        let seen_frame = (frame.phrase_index(), frame.started());
        Self {
            rotator,
            bounds,
            config,
            elapsed: Duration::ZERO,
            visible: 0,
            seen_frame,
            dirty: true,
        }
    }

    /// Mount the rotator (starting its timer if `auto`).
    pub fn mount(&mut self) -> Result<()> {
        self.rotator.mount()?;
        self.sync(Instant::now());
        self.dirty = true;
        Ok(())
    }

    /// Unmount the rotator, cancelling its timer.
    pub fn unmount(&mut self) {
        self.rotator.unmount();
    }

    /// The underlying rotator.
    pub const fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    /// Mutable access to the underlying rotator.
    ///
    /// Transitions made through it are picked up on the next [`tick`](Self::tick).
    pub const fn rotator_mut(&mut self) -> &mut Rotator {
        &mut self.rotator
    }

    /// Widget configuration.
    pub const fn config(&self) -> &RotatingTextConfig {
        &self.config
    }

    /// Advance one phrase now.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        let index = self.rotator.next();
        self.sync(Instant::now());
        index
    }

    /// Step back one phrase now.
    pub fn previous(&mut self) -> usize {
        let index = self.rotator.previous();
        self.sync(Instant::now());
        index
    }

    /// Apply pending timer ticks and update unit visibility as of `now`.
    ///
    /// Returns the number of rotations applied.
    pub fn tick(&mut self, now: Instant) -> usize {
        let advanced = self.rotator.poll();
        self.sync(now);
        advanced
    }

    /// Whether every unit of the current phrase has entered.
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.rotator.frame().settle_time()
    }

    /// Time the current phrase has been on screen, as of the last tick.
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn sync(&mut self, now: Instant) {
        let frame = self.rotator.frame();
        let identity = (frame.phrase_index(), frame.started());
        let elapsed = now.saturating_duration_since(frame.started());
        if identity == self.seen_frame {
            // Within one frame time only moves forward
            self.elapsed = self.elapsed.max(elapsed);
        } else {
            self.seen_frame = identity;
            self.elapsed = elapsed;
            self.dirty = true;
        }
        let visible = frame.visible_count(self.elapsed);
        if visible != self.visible {
            self.visible = visible;
            self.dirty = true;
        }
    }
}

/// Display columns of a unit; control characters are never written raw.
fn unit_width(text: &str) -> (u16, bool) {
    let printable = !text.chars().any(char::is_control);
    let width = if printable {
        text.width()
    } else {
        text.chars().count()
    };
    (u16::try_from(width).unwrap_or(u16::MAX), printable)
}

impl Widget for RotatingText {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, out: &mut OutputBuffer) {
        if self.bounds.is_empty() {
            return;
        }
        let Rect { x, y, width, .. } = self.bounds;
        // Rows past the last addressable one are dropped
        let room = u32::from(u16::MAX) - u32::from(y) + 1;
        let height = match u16::try_from(room) {
            Ok(room) => self.bounds.height.min(room),
            Err(_) => self.bounds.height,
        };

        // Clear the area with background
        out.reset_attrs();
        if let Some(bg) = self.config.bg {
            out.set_bg(bg);
        }
        for row in 0..height {
            out.cursor_move(x, y.saturating_add(row));
            out.write_blank(width);
        }

        out.set_fg(self.config.fg);
        out.set_modifiers(self.config.modifiers);
        out.cursor_move(x, y);

        let frame = self.rotator.frame();
        let line_breaks = matches!(self.rotator.split_by(), SplitBy::Lines);
        let mut units = frame.units().iter();
        let mut col = 0u16;
        let mut row = 0u16;
        let mut clipped = false;

        for word in frame.words() {
            for unit in units.by_ref().take(word.len()) {
                let (w, printable) = unit_width(&unit.text);
                if clipped || col.saturating_add(w) > width {
                    clipped = true;
                    continue;
                }
                if printable && unit.is_visible(self.elapsed) {
                    out.write_str(&unit.text);
                } else {
                    out.write_blank(w);
                }
                col += w;
            }

            if !word.trailing_space {
                continue;
            }
            if line_breaks {
                row += 1;
                if row >= height {
                    break;
                }
                col = 0;
                clipped = false;
                out.cursor_move(x, y.saturating_add(row));
            } else if !clipped && col < width {
                out.write_blank(1);
                col += 1;
            }
        }

        out.reset_attrs();
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                self.next();
            }
            KeyCode::Left => {
                self.previous();
            }
            KeyCode::Home => {
                self.rotator.reset();
                self.sync(Instant::now());
            }
            _ => return false,
        }
        true
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
