//! Unit splitting strategies.
//!
//! Grapheme clusters are the correct unit: `"e\u{301}"` or a ZWJ family emoji
//! is one visible character built from several code points. Splitting by
//! code point is kept as a degraded fallback that can be forced at startup.

use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Environment variable that forces a strategy (`grapheme` or `codepoint`).
pub const SEGMENTER_ENV: &str = "ROTATING_TEXT_SEGMENTER";

/// Splits one token into display units.
pub trait Segmenter {
    /// Split `token` into ordered, non-overlapping slices covering it.
    fn split_units<'a>(&self, token: &'a str) -> Vec<&'a str>;
}

/// Extended grapheme cluster segmentation (UAX #29).
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeSegmenter;

impl Segmenter for GraphemeSegmenter {
    fn split_units<'a>(&self, token: &'a str) -> Vec<&'a str> {
        token.graphemes(true).collect()
    }
}

/// One unit per Unicode scalar value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePointSegmenter;

impl Segmenter for CodePointSegmenter {
    fn split_units<'a>(&self, token: &'a str) -> Vec<&'a str> {
        token
            .char_indices()
            .map(|(start, c)| &token[start..start + c.len_utf8()])
            .collect()
    }
}

/// Which [`Segmenter`] a rotator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentStrategy {
    /// [`GraphemeSegmenter`].
    #[default]
    Grapheme,
    /// [`CodePointSegmenter`].
    CodePoint,
}

static GRAPHEME: GraphemeSegmenter = GraphemeSegmenter;
static CODE_POINT: CodePointSegmenter = CodePointSegmenter;

impl SegmentStrategy {
    /// Pick the strategy for this process.
    ///
    /// Graphemes unless [`SEGMENTER_ENV`] is set to `codepoint`. The
    /// environment is read on the first call only.
    pub fn detect() -> Self {
        static DETECTED: OnceLock<SegmentStrategy> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            let strategy = Self::from_override(std::env::var(SEGMENTER_ENV).ok().as_deref());
            log::debug!("segmenting by {strategy:?}");
            strategy
        })
    }

    fn from_override(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Grapheme;
        };
        Self::from_name(value).unwrap_or_else(|| {
            log::warn!("ignoring unknown {SEGMENTER_ENV} value {value:?}");
            Self::Grapheme
        })
    }

    /// Parse a strategy name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "grapheme" | "graphemes" => Some(Self::Grapheme),
            "codepoint" | "code_point" | "chars" => Some(Self::CodePoint),
            _ => None,
        }
    }

    /// The segmenter implementing this strategy.
    pub fn segmenter(self) -> &'static dyn Segmenter {
        match self {
            Self::Grapheme => &GRAPHEME,
            Self::CodePoint => &CODE_POINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILY: &str = "👨\u{200d}👩\u{200d}👧\u{200d}👦";

    #[test]
    fn test_grapheme_keeps_clusters() {
        let seg = GraphemeSegmenter;
        assert_eq!(seg.split_units("e\u{301}x"), vec!["e\u{301}", "x"]);
        assert_eq!(seg.split_units(FAMILY), vec![FAMILY]);
        assert_eq!(seg.split_units("👋🏽!"), vec!["👋🏽", "!"]);
    }

    #[test]
    fn test_code_point_splits_clusters() {
        let seg = CodePointSegmenter;
        assert_eq!(seg.split_units("e\u{301}x"), vec!["e", "\u{301}", "x"]);
        assert_eq!(seg.split_units(FAMILY).len(), 7);
    }

    #[test]
    fn test_both_cover_input() {
        for strategy in [SegmentStrategy::Grapheme, SegmentStrategy::CodePoint] {
            let units = strategy.segmenter().split_units("héllo🔥");
            assert_eq!(units.concat(), "héllo🔥");
        }
    }

    #[test]
    fn test_empty_token() {
        assert!(GraphemeSegmenter.split_units("").is_empty());
        assert!(CodePointSegmenter.split_units("").is_empty());
    }

    #[test]
    fn test_from_name() {
        use SegmentStrategy::{CodePoint, Grapheme};
        assert_eq!(SegmentStrategy::from_name("Grapheme"), Some(Grapheme));
        assert_eq!(SegmentStrategy::from_name(" codepoint "), Some(CodePoint));
        assert_eq!(SegmentStrategy::from_name("words"), None);
    }

    #[test]
    fn test_env_override() {
        use SegmentStrategy::{CodePoint, Grapheme};
        assert_eq!(SegmentStrategy::from_override(None), Grapheme);
        assert_eq!(SegmentStrategy::from_override(Some("codepoint")), CodePoint);
        assert_eq!(SegmentStrategy::from_override(Some("bogus")), Grapheme);
    }

    #[test]
    fn test_detect_is_stable() {
        assert_eq!(SegmentStrategy::detect(), SegmentStrategy::detect());
    }
}
