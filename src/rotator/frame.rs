//! Frame: one laid-out phrase with per-unit delays.

use crate::segment::{reassemble, unit_count, Word};
use crate::stagger::{delay_duration, Stagger};
use std::time::{Duration, Instant};

/// A display unit with its position and entry delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// The unit's text (a grapheme cluster, word, line or piece).
    pub text: String,
    /// Index of the word this unit belongs to.
    pub word: usize,
    /// Position across the whole phrase.
    pub index: usize,
    /// Entry delay in seconds.
    pub delay: f64,
}

impl Unit {
    /// Entry delay as a [`Duration`].
    #[inline]
    pub fn delay_duration(&self) -> Duration {
        delay_duration(self.delay)
    }

    /// Whether the unit has entered after `elapsed` time on screen.
    #[inline]
    pub fn is_visible(&self, elapsed: Duration) -> bool {
        self.delay_duration() <= elapsed
    }
}

/// The current phrase, segmented and staggered.
///
/// Built fresh on every transition; delays are relative to [`Frame::started`].
#[derive(Debug, Clone)]
pub struct Frame {
    phrase_index: usize,
    words: Vec<Word>,
    units: Vec<Unit>,
    started: Instant,
}

impl Frame {
    /// Lay out `words` for the phrase at `phrase_index`.
    pub fn layout(phrase_index: usize, words: Vec<Word>, stagger: &Stagger) -> Self {
        let total = unit_count(&words);
        let units = words
            .iter()
            .enumerate()
            .flat_map(|(word, w)| w.units.iter().map(move |text| (word, text)))
            .enumerate()
            .map(|(index, (word, text))| Unit {
                text: text.clone(),
                word,
                index,
                delay: stagger.delay(index, total),
            })
            .collect();

        Self {
            phrase_index,
            words,
            units,
            started: Instant::now(),
        }
    }

    /// Recompute delays in place, keeping the start time.
    pub fn restagger(&mut self, stagger: &Stagger) {
        let total = self.units.len();
        for unit in &mut self.units {
            unit.delay = stagger.delay(unit.index, total);
        }
    }

    /// Index of the phrase in the rotator's list.
    #[inline]
    pub const fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Segmented words.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Flattened units, in phrase order.
    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Total number of units.
    #[inline]
    pub fn total_units(&self) -> usize {
        self.units.len()
    }

    /// When this frame was laid out.
    #[inline]
    pub const fn started(&self) -> Instant {
        self.started
    }

    /// Units visible after `elapsed`.
    pub fn visible_at(&self, elapsed: Duration) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.is_visible(elapsed))
    }

    /// Number of units visible after `elapsed`.
    pub fn visible_count(&self, elapsed: Duration) -> usize {
        self.visible_at(elapsed).count()
    }

    /// Time until the last unit has entered.
    pub fn settle_time(&self) -> Duration {
        self.units
            .iter()
            .map(Unit::delay_duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// The phrase text, rebuilt from its units.
    pub fn text(&self, separator: &str) -> String {
        reassemble(&self.words, separator)
    }
}
