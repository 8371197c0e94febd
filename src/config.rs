//! Rotator configuration.

use crate::error::ConfigError;
use crate::segment::{SegmentStrategy, SplitBy};
use crate::stagger::{Stagger, StaggerFrom};
use std::fmt;
use std::time::Duration;

/// Default period between automatic rotations.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(2000);

/// Callback invoked with the new phrase index after every transition.
pub type OnNext = Box<dyn FnMut(usize) + Send>;

/// Configuration for a [`Rotator`](crate::Rotator).
///
/// Everything except the phrase list has a default:
///
/// ```rust
/// use rotating_text::{RotatorConfig, StaggerFrom};
/// use std::time::Duration;
///
/// let config = RotatorConfig::new(["hi there 👋", "stay tuned 🔥"])
///     .with_rotation_interval(Duration::from_millis(1500))
///     .with_stagger(StaggerFrom::Center, 0.025);
/// assert!(config.validate().is_ok());
/// ```
pub struct RotatorConfig {
    /// Phrases to rotate through. Must be non-empty.
    pub texts: Vec<String>,
    /// Advance automatically on a timer.
    pub auto: bool,
    /// Period of the automatic timer.
    pub rotation_interval: Duration,
    /// Wrap to the first phrase after the last one (otherwise hold).
    pub loop_phrases: bool,
    /// Per-unit entry delay.
    pub stagger: Stagger,
    /// Unit granularity.
    pub split_by: SplitBy,
    /// Unit splitting strategy.
    pub segmenter: SegmentStrategy,
    /// Transition notification hook.
    pub on_next: Option<OnNext>,
}

impl RotatorConfig {
    /// Create a configuration with default options for the given phrases.
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            auto: true,
            rotation_interval: DEFAULT_ROTATION_INTERVAL,
            loop_phrases: true,
            stagger: Stagger::default(),
            split_by: SplitBy::default(),
            segmenter: SegmentStrategy::detect(),
            on_next: None,
        }
    }

    /// Enable or disable automatic rotation.
    #[must_use]
    pub fn with_auto(mut self, auto: bool) -> Self {
        self.auto = auto;
        self
    }

    /// Set the automatic rotation period.
    #[must_use]
    pub fn with_rotation_interval(mut self, interval: Duration) -> Self {
        self.rotation_interval = interval;
        self
    }

    /// Wrap (`true`) or hold (`false`) at the end of the list.
    #[must_use]
    pub fn with_loop(mut self, loop_phrases: bool) -> Self {
        self.loop_phrases = loop_phrases;
        self
    }

    /// Set the stagger origin and per-unit duration in seconds.
    #[must_use]
    pub fn with_stagger(mut self, from: StaggerFrom, duration: f64) -> Self {
        self.stagger = Stagger::new(from, duration);
        self
    }

    /// Set the split granularity.
    #[must_use]
    pub fn with_split_by(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }

    /// Force a segmentation strategy.
    #[must_use]
    pub fn with_segmenter(mut self, segmenter: SegmentStrategy) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Register the transition callback.
    #[must_use]
    pub fn on_next(mut self, callback: impl FnMut(usize) + Send + 'static) -> Self {
        self.on_next = Some(Box::new(callback));
        self
    }

    /// Check every option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.texts.is_empty() {
            return Err(ConfigError::EmptyPhraseList);
        }
        if self.auto && self.rotation_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        self.stagger.validate()?;
        self.split_by.validate()
    }
}

impl fmt::Debug for RotatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatorConfig")
            .field("texts", &self.texts)
            .field("auto", &self.auto)
            .field("rotation_interval", &self.rotation_interval)
            .field("loop_phrases", &self.loop_phrases)
            .field("stagger", &self.stagger)
            .field("split_by", &self.split_by)
            .field("segmenter", &self.segmenter)
            .field("on_next", &self.on_next.is_some())
            .finish()
    }
}
