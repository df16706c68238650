//! Runtime selection of a moving average
//!
//! [`MovingAverageKind`] names one of the four averages so callers can pick
//! one from configuration or user input and compute it through a single
//! entry point.
//!
//! # Example
//!
//! ```rust
//! use ma_core::MovingAverageKind;
//!
//! let kind: MovingAverageKind = "wma".parse().unwrap();
//! assert_eq!(kind, MovingAverageKind::Weighted);
//! assert_eq!(kind.compute(&[1.0, 2.0, 3.0], Some(0), Some(1)), Ok(1.0));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::Result;
use crate::overlap;
use crate::types::Float;

/// One of the four moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovingAverageKind {
    /// Simple moving average (SMA)
    Simple,
    /// Exponential moving average (EMA)
    Exponential,
    /// Smoothed moving average (SMMA)
    Smoothed,
    /// Weighted moving average (WMA)
    Weighted,
}

impl MovingAverageKind {
    /// Every kind, in declaration order.
    pub const ALL: [MovingAverageKind; 4] = [
        MovingAverageKind::Simple,
        MovingAverageKind::Exponential,
        MovingAverageKind::Smoothed,
        MovingAverageKind::Weighted,
    ];

    /// Short name: `"sma"`, `"ema"`, `"smma"` or `"wma"`.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            MovingAverageKind::Simple => "sma",
            MovingAverageKind::Exponential => "ema",
            MovingAverageKind::Smoothed => "smma",
            MovingAverageKind::Weighted => "wma",
        }
    }

    /// Long name, matching the function in [`crate::overlap`].
    pub const fn name(&self) -> &'static str {
        match self {
            MovingAverageKind::Simple => "simple_moving_average",
            MovingAverageKind::Exponential => "exponential_moving_average",
            MovingAverageKind::Smoothed => "smoothed_moving_average",
            MovingAverageKind::Weighted => "weighted_moving_average",
        }
    }

    /// Compute this average over `series`.
    pub fn compute(
        &self,
        series: &[Float],
        idx: Option<isize>,
        tail: Option<isize>,
    ) -> Result<Float> {
        let average = match self {
            MovingAverageKind::Simple => overlap::simple_moving_average,
            MovingAverageKind::Exponential => overlap::exponential_moving_average,
            MovingAverageKind::Smoothed => overlap::smoothed_moving_average,
            MovingAverageKind::Weighted => overlap::weighted_moving_average,
        };
        average(series, idx, tail)
    }
}

impl fmt::Display for MovingAverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Error returned when a string names no known moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown moving average kind")]
pub struct ParseKindError;

impl FromStr for MovingAverageKind {
    type Err = ParseKindError;

    /// Accepts the abbreviation, the long name, or the bare adjective
    /// (`"simple"`), ignoring ASCII case.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                let adjective = kind.name().split('_').next().unwrap_or_default();
                [kind.abbreviation(), kind.name(), adjective]
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(s))
            })
            .ok_or(ParseKindError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_all_spellings() {
        for kind in MovingAverageKind::ALL {
            assert_eq!(kind.abbreviation().parse(), Ok(kind));
            assert_eq!(kind.name().parse(), Ok(kind));
            assert_eq!(kind.abbreviation().to_uppercase().parse(), Ok(kind));
        }
        assert_eq!("Smoothed".parse(), Ok(MovingAverageKind::Smoothed));
        assert_eq!(" ema ".parse(), Ok(MovingAverageKind::Exponential));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!("hma".parse::<MovingAverageKind>(), Err(ParseKindError));
        assert_eq!("".parse::<MovingAverageKind>(), Err(ParseKindError));
        assert_eq!("moving".parse::<MovingAverageKind>(), Err(ParseKindError));
    }

    #[test]
    fn test_display_round_trips() {
        for kind in MovingAverageKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_compute_dispatches() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(
            MovingAverageKind::Simple.compute(&series, None, None),
            overlap::sma(&series, None, None)
        );
        assert_eq!(
            MovingAverageKind::Exponential.compute(&series, Some(4), Some(3)),
            overlap::ema(&series, Some(4), Some(3))
        );
        assert_eq!(
            MovingAverageKind::Smoothed.compute(&series, None, None),
            overlap::smma(&series, None, None)
        );
        assert_eq!(
            MovingAverageKind::Weighted.compute(&series, Some(2), Some(2)),
            overlap::wma(&series, Some(2), Some(2))
        );
    }
}
