//! Rotator: phrase index state machine.
//!
//! ```text
//!            mount()                advance()
//!   Idle ─────────────▶ Displaying(0) ─────────▶ Displaying(next(i))
//!    ▲                        │
//!    └──── unmount() / drop ──┘
//! ```
//!
//! `next(i)` wraps to 0 after the last phrase when looping, and holds at the
//! last phrase otherwise. Every transition to a different phrase re-segments
//! it and lays out a fresh [`Frame`], so stagger delays restart from zero. A
//! held phrase keeps its frame.
//!
//! Advances come from two triggers: the manual [`Rotator::next`] and, when
//! `auto` is on, a single [`TickerActor`] whose ticks are drained by
//! [`Rotator::poll`] on the owner's thread.

mod frame;

pub use frame::{Frame, Unit};

use crate::actor::TickerActor;
use crate::config::{OnNext, RotatorConfig};
use crate::error::{ConfigError, Result};
use crate::segment::{segment, SegmentStrategy, SplitBy};
use crate::stagger::{Stagger, StaggerFrom};
use std::fmt;
use std::time::Duration;

/// Lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorState {
    /// Not mounted; no timer is running.
    Idle,
    /// Showing the phrase at this index.
    Displaying(usize),
}

/// Owner of the current phrase index and the rotation timer.
pub struct Rotator {
    texts: Vec<String>,
    index: usize,
    mounted: bool,
    auto: bool,
    rotation_interval: Duration,
    loop_phrases: bool,
    stagger: Stagger,
    split_by: SplitBy,
    segmenter: SegmentStrategy,
    on_next: Option<OnNext>,
    timer: Option<TickerActor>,
    frame: Frame,
}

impl Rotator {
    /// Build a rotator in the [`RotatorState::Idle`] state at index 0.
    pub fn new(config: RotatorConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let RotatorConfig {
            texts,
            auto,
            rotation_interval,
            loop_phrases,
            stagger,
            split_by,
            segmenter,
            on_next,
        } = config;

        let words = segment(&texts[0], &split_by, segmenter.segmenter());
        let frame = Frame::layout(0, words, &stagger);

        Ok(Self {
            texts,
            index: 0,
            mounted: false,
            auto,
            rotation_interval,
            loop_phrases,
            stagger,
            split_by,
            segmenter,
            on_next,
            timer: None,
            frame,
        })
    }

    /// Enter [`RotatorState::Displaying`] and start the timer if `auto`.
    ///
    /// Mounting twice is a no-op.
    pub fn mount(&mut self) -> Result<()> {
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;
        self.frame = self.layout(self.index);
        log::debug!("mounted at phrase {}", self.index);
        self.arm_timer()
    }

    /// Return to [`RotatorState::Idle`], cancelling the timer.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.disarm_timer();
        log::debug!("unmounted at phrase {}", self.index);
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> RotatorState {
        if self.mounted {
            RotatorState::Displaying(self.index)
        } else {
            RotatorState::Idle
        }
    }

    /// Current phrase index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current phrase.
    #[inline]
    pub fn current(&self) -> &str {
        &self.texts[self.index]
    }

    /// All phrases.
    #[inline]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Number of phrases.
    #[inline]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Always `false`: construction rejects empty phrase lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// The laid-out current phrase.
    #[inline]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Split granularity.
    #[inline]
    pub const fn split_by(&self) -> &SplitBy {
        &self.split_by
    }

    /// Stagger configuration.
    #[inline]
    pub const fn stagger(&self) -> Stagger {
        self.stagger
    }

    /// Whether automatic rotation is enabled.
    #[inline]
    pub const fn is_auto(&self) -> bool {
        self.auto
    }

    /// Whether the index wraps at the end of the list.
    #[inline]
    pub const fn is_looping(&self) -> bool {
        self.loop_phrases
    }

    /// Automatic rotation period.
    #[inline]
    pub const fn rotation_interval(&self) -> Duration {
        self.rotation_interval
    }

    /// Period of the running timer, if one is armed.
    pub fn timer_interval(&self) -> Option<Duration> {
        self.timer.as_ref().map(TickerActor::interval)
    }

    /// Index that follows `i`.
    pub fn next_index(&self, i: usize) -> usize {
        let last = self.texts.len() - 1;
        if i >= last {
            if self.loop_phrases {
                0
            } else {
                last
            }
        } else {
            i + 1
        }
    }

    /// Index that precedes `i`.
    pub fn previous_index(&self, i: usize) -> usize {
        let last = self.texts.len() - 1;
        if i == 0 {
            if self.loop_phrases {
                last
            } else {
                0
            }
        } else {
            i - 1
        }
    }

    /// Advance one phrase. Returns the new index.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        self.transition(self.next_index(self.index))
    }

    /// Step back one phrase. Returns the new index.
    pub fn previous(&mut self) -> usize {
        self.transition(self.previous_index(self.index))
    }

    /// Jump to `index`, clamped to the last phrase. Returns the new index.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.transition(index.min(self.texts.len() - 1))
    }

    /// Go back to the first phrase.
    pub fn reset(&mut self) -> usize {
        self.transition(0)
    }

    /// Apply pending timer ticks, one advance per tick.
    ///
    /// Returns the number of advances performed.
    pub fn poll(&mut self) -> usize {
        let pending = self
            .timer
            .as_ref()
            .map_or(0, |timer| timer.receiver().try_iter().count());
        for _ in 0..pending {
            self.next();
        }
        pending
    }

    /// Block until the next timer tick (at most `timeout`) and apply it.
    ///
    /// Returns the number of advances performed (0 or 1).
    pub fn wait_tick(&mut self, timeout: Duration) -> usize {
        let ticked = self
            .timer
            .as_ref()
            .is_some_and(|timer| timer.receiver().recv_timeout(timeout).is_ok());
        if ticked {
            self.next();
            1
        } else {
            0
        }
    }

    /// Enable or disable automatic rotation, re-arming the timer if mounted.
    pub fn set_auto(&mut self, auto: bool) -> Result<()> {
        if auto && self.rotation_interval.is_zero() {
            return Err(ConfigError::ZeroInterval.into());
        }
        if self.auto == auto {
            return Ok(());
        }
        self.auto = auto;
        self.rearm_timer()
    }

    /// Change the rotation period, re-arming the timer if mounted.
    pub fn set_rotation_interval(&mut self, interval: Duration) -> Result<()> {
        if self.auto && interval.is_zero() {
            return Err(ConfigError::ZeroInterval.into());
        }
        if self.rotation_interval == interval {
            return Ok(());
        }
        self.rotation_interval = interval;
        self.rearm_timer()
    }

    /// Wrap or hold at the end of the list from now on.
    pub const fn set_loop(&mut self, loop_phrases: bool) {
        self.loop_phrases = loop_phrases;
    }

    /// Change the stagger and recompute delays of the current frame.
    pub fn set_stagger(&mut self, from: StaggerFrom, duration: f64) -> Result<()> {
        let stagger = Stagger::new(from, duration);
        stagger.validate()?;
        self.stagger = stagger;
        self.frame.restagger(&stagger);
        Ok(())
    }

    /// Replace the transition callback.
    pub fn set_on_next(&mut self, callback: impl FnMut(usize) + Send + 'static) {
        self.on_next = Some(Box::new(callback));
    }

    fn transition(&mut self, index: usize) -> usize {
        let previous = self.index;
        if index == previous {
            // Held phrase keeps its frame so the entry animation does not replay
            log::trace!("phrase {index} held");
        } else {
            self.index = index;
            self.frame = self.layout(index);
            log::debug!("phrase {previous} -> {index}");
        }

        if let Some(callback) = self.on_next.as_mut() {
            callback(index);
        }
        index
    }

    fn layout(&self, index: usize) -> Frame {
        let words = segment(
            &self.texts[index],
            &self.split_by,
            self.segmenter.segmenter(),
        );
        Frame::layout(index, words, &self.stagger)
    }

    fn arm_timer(&mut self) -> Result<()> {
        if self.mounted && self.auto && self.timer.is_none() {
            self.timer = Some(TickerActor::spawn(self.rotation_interval)?);
        }
        Ok(())
    }

    fn disarm_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
        }
    }

    // Stop-then-start: never more than one live timer.
    fn rearm_timer(&mut self) -> Result<()> {
        self.disarm_timer();
        self.arm_timer()
    }
}

impl Drop for Rotator {
    fn drop(&mut self) {
        self.disarm_timer();
    }
}

impl fmt::Debug for Rotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotator")
            .field("state", &self.state())
            .field("phrases", &self.texts.len())
            .field("auto", &self.auto)
            .field("rotation_interval", &self.rotation_interval)
            .field("loop_phrases", &self.loop_phrases)
            .field("stagger", &self.stagger)
            .field("split_by", &self.split_by)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
