//! Stagger: per-unit entry delays.
//!
//! A stagger turns a unit's position into a delay so that units enter one
//! after another as a wave. Positions are global across the whole phrase:
//! the wave runs through word boundaries instead of restarting per word.
//!
//! ```text
//!   units:   h  e  l  l  o  _  w  o  r  l  d
//!   first:   0  1  2  3  4     5  6  7  8  9   (x duration)
//!   center:  5  4  3  2  1     0  1  2  3  4
//! ```

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Where the stagger wave starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerFrom {
    /// First unit enters first.
    #[default]
    First,
    /// Last unit enters first.
    Last,
    /// Middle unit (`floor(total / 2)`) enters first, spreading outward.
    Center,
    /// The unit at this position enters first, spreading outward.
    ///
    /// The position may lie outside the phrase; distances are still measured
    /// from it.
    Index(i64),
}

impl FromStr for StaggerFrom {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            "center" => Ok(Self::Center),
            other => other
                .parse::<i64>()
                .map(Self::Index)
                .map_err(|_| ConfigError::InvalidStaggerFrom(s.to_string())),
        }
    }
}

impl fmt::Display for StaggerFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Last => f.write_str("last"),
            Self::Center => f.write_str("center"),
            Self::Index(n) => write!(f, "{n}"),
        }
    }
}

/// Delay of the unit at `index` among `total` units.
///
/// The result is in the same unit as `per_unit` (the crate uses seconds).
/// `Last` with `total == 0` yields a negative value; [`delay_duration`]
/// clamps it.
#[allow(clippy::cast_precision_loss)]
pub fn delay(index: usize, total: usize, from: StaggerFrom, per_unit: f64) -> f64 {
    let i = index as f64;
    let steps = match from {
        StaggerFrom::First => i,
        StaggerFrom::Last => total as f64 - 1.0 - i,
        StaggerFrom::Center => ((total / 2) as f64 - i).abs(),
        StaggerFrom::Index(n) => (n as f64 - i).abs(),
    };
    steps * per_unit
}

/// Convert a delay in seconds to a [`Duration`], clamping negatives to zero.
pub fn delay_duration(seconds: f64) -> Duration {
    if seconds.is_finite() && seconds > 0.0 {
        Duration::from_secs_f64(seconds)
    } else {
        Duration::ZERO
    }
}

/// A stagger origin paired with its per-unit duration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stagger {
    /// Where the wave starts.
    pub from: StaggerFrom,
    /// Seconds added per unit of distance from the origin.
    pub duration: f64,
}

impl Stagger {
    /// Create a new stagger.
    pub const fn new(from: StaggerFrom, duration: f64) -> Self {
        Self { from, duration }
    }

    /// Reject negative, NaN or infinite durations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_finite() && self.duration >= 0.0 {
            Ok(())
        } else {
            let got = self.duration.to_string();
            Err(ConfigError::InvalidStaggerDuration(got))
        }
    }

    /// Delay in seconds for the unit at `index` among `total` units.
    #[inline]
    pub fn delay(&self, index: usize, total: usize) -> f64 {
        delay(index, total, self.from, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_first_is_linear() {
        assert!(approx(delay(3, 10, StaggerFrom::First, 0.05), 0.15));
        assert!(approx(delay(0, 10, StaggerFrom::First, 0.05), 0.0));
    }

    #[test]
    fn test_last_counts_down() {
        assert!(approx(delay(9, 10, StaggerFrom::Last, 1.0), 0.0));
        assert!(approx(delay(0, 10, StaggerFrom::Last, 1.0), 9.0));
    }

    #[test]
    fn test_center_is_symmetric() {
        let d0 = delay(0, 5, StaggerFrom::Center, 1.0);
        let d4 = delay(4, 5, StaggerFrom::Center, 1.0);
        assert!(approx(d0, 2.0));
        assert!(approx(d0, d4));
        assert!(approx(delay(2, 5, StaggerFrom::Center, 1.0), 0.0));
    }

    #[test]
    fn test_center_even_total_uses_floor() {
        // center = floor(4 / 2) = 2
        assert!(approx(delay(2, 4, StaggerFrom::Center, 1.0), 0.0));
        assert!(approx(delay(0, 4, StaggerFrom::Center, 1.0), 2.0));
        assert!(approx(delay(3, 4, StaggerFrom::Center, 1.0), 1.0));
    }

    #[test]
    fn test_index_origin() {
        assert!(approx(delay(1, 6, StaggerFrom::Index(4), 0.5), 1.5));
        assert!(approx(delay(4, 6, StaggerFrom::Index(4), 0.5), 0.0));
        assert!(approx(delay(0, 6, StaggerFrom::Index(-2), 1.0), 2.0));
    }

    #[test]
    fn test_zero_duration_means_no_stagger() {
        for i in 0..8 {
            assert!(approx(delay(i, 8, StaggerFrom::Center, 0.0), 0.0));
        }
    }

    #[test]
    fn test_parse_keywords_and_integers() {
        assert_eq!("first".parse::<StaggerFrom>(), Ok(StaggerFrom::First));
        assert_eq!("last".parse::<StaggerFrom>(), Ok(StaggerFrom::Last));
        assert_eq!(" center ".parse::<StaggerFrom>(), Ok(StaggerFrom::Center));
        assert_eq!("7".parse::<StaggerFrom>(), Ok(StaggerFrom::Index(7)));
        assert_eq!("-3".parse::<StaggerFrom>(), Ok(StaggerFrom::Index(-3)));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "middle".parse::<StaggerFrom>(),
            Err(ConfigError::InvalidStaggerFrom("middle".to_string()))
        );
        assert!("1.5".parse::<StaggerFrom>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        use StaggerFrom::{Center, First, Index, Last};
        for from in [First, Last, Center, Index(12)] {
            assert_eq!(from.to_string().parse::<StaggerFrom>(), Ok(from));
        }
    }

    #[test]
    fn test_delay_duration_clamps() {
        assert_eq!(delay_duration(-1.0), Duration::ZERO);
        assert_eq!(delay_duration(f64::NAN), Duration::ZERO);
        assert_eq!(delay_duration(0.25), Duration::from_millis(250));
    }

    #[test]
    fn test_validate() {
        assert!(Stagger::new(StaggerFrom::First, 0.0).validate().is_ok());
        assert!(Stagger::new(StaggerFrom::First, -0.1).validate().is_err());
        let unbounded = Stagger::new(StaggerFrom::First, f64::INFINITY);
        assert!(unbounded.validate().is_err());
    }
}
