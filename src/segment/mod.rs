//! Segmenter: phrase to display units.
//!
//! A phrase is split into [`Word`]s according to a [`SplitBy`] granularity.
//! Each word holds its units in order and records whether a separator
//! followed it, so the phrase can be reassembled exactly:
//!
//! ```rust
//! use rotating_text::segment::{segment, SegmentStrategy, SplitBy};
//!
//! let words = segment("hi there", &SplitBy::Characters, SegmentStrategy::Grapheme.segmenter());
//! assert_eq!(words[0].units, ["h", "i"]);
//! assert!(words[0].trailing_space);
//! assert!(!words[1].trailing_space);
//! ```

mod strategy;

pub use strategy::{
    CodePointSegmenter, GraphemeSegmenter, SegmentStrategy, Segmenter, SEGMENTER_ENV,
};

use crate::error::ConfigError;
use std::str::FromStr;

/// One separator-delimited token of a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    /// Display units, in order.
    pub units: Vec<String>,
    /// Whether a separator followed this token (every word but the last).
    pub trailing_space: bool,
}

impl Word {
    /// Number of display units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the word has no units (produced by adjacent separators).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Split granularity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SplitBy {
    /// Space-separated words, each split into characters.
    #[default]
    Characters,
    /// Space-separated words, each word a single unit.
    Words,
    /// Newline-separated lines, each line a single unit.
    Lines,
    /// Pieces separated by a custom delimiter, each piece a single unit.
    Custom(String),
}

impl SplitBy {
    /// The separator between tokens.
    pub fn separator(&self) -> &str {
        match self {
            Self::Characters | Self::Words => " ",
            Self::Lines => "\n",
            Self::Custom(delimiter) => delimiter,
        }
    }

    /// Reject an empty custom delimiter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Custom(delimiter) if delimiter.is_empty() => Err(ConfigError::EmptyDelimiter),
            _ => Ok(()),
        }
    }
}

impl FromStr for SplitBy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = match s {
            "characters" => Self::Characters,
            "words" => Self::Words,
            "lines" => Self::Lines,
            other => Self::Custom(other.to_string()),
        };
        split.validate()?;
        Ok(split)
    }
}

/// Split `text` into words.
///
/// Adjacent, leading or trailing separators produce empty words; they are
/// kept so that joining the units back with the separator yields `text`.
pub fn segment(text: &str, split_by: &SplitBy, segmenter: &dyn Segmenter) -> Vec<Word> {
    let tokens: Vec<&str> = text.split(split_by.separator()).collect();
    let last = tokens.len().saturating_sub(1);

    tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            let units = match split_by {
                SplitBy::Characters => segmenter
                    .split_units(token)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                _ if token.is_empty() => Vec::new(),
                _ => vec![token.to_string()],
            };
            Word {
                units,
                trailing_space: i != last,
            }
        })
        .collect()
}

/// Join words back into a phrase, inserting `separator` after each word that
/// had one.
pub fn reassemble(words: &[Word], separator: &str) -> String {
    let mut text = String::new();
    for word in words {
        for unit in &word.units {
            text.push_str(unit);
        }
        if word.trailing_space {
            text.push_str(separator);
        }
    }
    text
}

/// Total number of units across `words`.
pub fn unit_count(words: &[Word]) -> usize {
    words.iter().map(Word::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graphemes() -> &'static dyn Segmenter {
        SegmentStrategy::Grapheme.segmenter()
    }

    #[test]
    fn test_characters_basic() {
        let words = segment("hi there 👋", &SplitBy::Characters, graphemes());
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].units, ["h", "i"]);
        assert_eq!(words[1].units, ["t", "h", "e", "r", "e"]);
        assert_eq!(words[2].units, ["👋"]);
        assert!(words[0].trailing_space);
        assert!(words[1].trailing_space);
        assert!(!words[2].trailing_space);
        assert_eq!(unit_count(&words), 8);
    }

    #[test]
    fn test_single_word_has_no_trailing_space() {
        let words = segment("yo", &SplitBy::Characters, graphemes());
        assert_eq!(words.len(), 1);
        assert!(!words[0].trailing_space);
    }

    #[test]
    fn test_reassemble_exact() {
        let phrases = [
            "hi there 👋",
            "welcome to eclipse 🌘",
            "e\u{301}te\u{301}",
            "double  space",
            " leading",
            "trailing ",
            " ",
        ];
        for phrase in phrases {
            for strategy in [SegmentStrategy::Grapheme, SegmentStrategy::CodePoint] {
                let words = segment(phrase, &SplitBy::Characters, strategy.segmenter());
                assert_eq!(reassemble(&words, " "), phrase);
            }
        }
    }

    #[test]
    fn test_double_space_yields_empty_word() {
        let words = segment("a  b", &SplitBy::Characters, graphemes());
        assert_eq!(words.len(), 3);
        assert!(words[1].is_empty());
        assert!(words[1].trailing_space);
    }

    #[test]
    fn test_words_granularity() {
        let words = segment("stay tuned 🔥", &SplitBy::Words, graphemes());
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].units, ["tuned"]);
        let text = reassemble(&words, SplitBy::Words.separator());
        assert_eq!(text, "stay tuned 🔥");
    }

    #[test]
    fn test_lines_granularity() {
        let split = SplitBy::Lines;
        let words = segment("one two\nthree", &split, graphemes());
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].units, ["one two"]);
        assert!(words[0].trailing_space);
        assert_eq!(reassemble(&words, split.separator()), "one two\nthree");
    }

    #[test]
    fn test_custom_granularity() {
        let split: SplitBy = "::".parse().unwrap();
        let words = segment("a::bc::", &split, graphemes());
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].units, ["bc"]);
        assert!(words[2].is_empty());
        assert_eq!(reassemble(&words, split.separator()), "a::bc::");
    }

    #[test]
    fn test_parse_split_by() {
        assert_eq!("characters".parse::<SplitBy>(), Ok(SplitBy::Characters));
        assert_eq!("words".parse::<SplitBy>(), Ok(SplitBy::Words));
        assert_eq!("lines".parse::<SplitBy>(), Ok(SplitBy::Lines));
        assert_eq!("".parse::<SplitBy>(), Err(ConfigError::EmptyDelimiter));
    }
}
