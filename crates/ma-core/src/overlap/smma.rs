//! Implementation of the Smoothed Moving Average (SMMA).
//!
//! The first value is the SMA of the `tail` elements preceding the output
//! window. Each subsequent step blends in the next element:
//!
//! ```text
//!          sum(p[t - tail + 1 ..= t]) - smma_(t-1) + p[t]
//! smma_t = ----------------------------------------------
//!                              tail
//! ```
//!
//! so `2 * tail` elements ending at `idx` are required.

use crate::error::Result;
use crate::overlap::sma::mean;
use crate::window::{resolve_defaults, signed_len, validate};
use crate::{simd, types, Float};

/// Default window when the caller omits `tail`: half of `idx`, rounded up.
fn derived_defaults(len: usize, idx: Option<isize>) -> (isize, isize) {
    let idx = idx.unwrap_or(signed_len(len) - 1);
    let mut tail = idx / 2;
    if idx % 2 != 0 {
        tail += 1;
    }
    (idx, tail)
}

/// Compute the smoothed moving average of `series`.
///
/// When `tail` is omitted it is derived from `idx` as `ceil(idx / 2)`, not
/// from the series length, because the leading SMA needs room of its own.
/// A single-element series therefore always fails with
/// [`MovingAverageError::InvalidTail`](crate::MovingAverageError::InvalidTail).
///
/// # Arguments
///
/// * `idx` - Optional, the index of the last datum to consider
/// * `tail` - Optional, the number of data to consider
///
/// # Example
///
/// ```rust
/// use ma_core::overlap::smoothed_moving_average;
///
/// let series: Vec<f64> = (1..=10).map(f64::from).collect();
/// let smma = smoothed_moving_average(&series, Some(9), Some(5)).unwrap();
/// assert!((smma - 8.5).abs() < 0.05);
/// ```
pub fn smoothed_moving_average(
    series: &[Float],
    idx: Option<isize>,
    tail: Option<isize>,
) -> Result<Float> {
    let (idx, tail) = match tail {
        Some(_) => resolve_defaults(series.len(), idx, tail),
        None => derived_defaults(series.len(), idx),
    };
    let window = validate(series.len(), idx, tail)?;
    let seed = validate(series.len(), idx - tail, tail)?;

    let n = types::from_len(window.len());
    // One sum per output step, each over the `tail` elements ending there.
    let sums = simd::rolling_sum(&series[seed.start() + 1..=window.end()], window.len());

    let mut value = mean(series, seed);
    for (window_sum, &newest) in sums.iter().zip(window.slice(series)) {
        value = (window_sum - value + newest) / n;
    }

    tracing::trace!(idx = window.end(), tail = window.len(), value, "smma");
    Ok(value)
}

/// Alias for [`smoothed_moving_average`].
#[inline]
pub fn smma(series: &[Float], idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
    smoothed_moving_average(series, idx, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MovingAverageError;
    use alloc::vec::Vec;

    fn one_to_ten() -> Vec<Float> {
        (1..=10).map(|i| i as Float).collect()
    }

    #[test]
    fn test_derived_defaults() {
        assert_eq!(derived_defaults(10, None), (9, 5));
        assert_eq!(derived_defaults(9, None), (8, 4));
        assert_eq!(derived_defaults(10, Some(5)), (5, 3));
        assert_eq!(derived_defaults(1, None), (0, 0));
    }

    #[test]
    fn test_smma_recurrence() {
        // seed = mean(1..=5) = 3, then
        // (20 - 3 + 6) / 5 = 4.6
        // (25 - 4.6 + 7) / 5 = 5.48
        // (30 - 5.48 + 8) / 5 = 6.504
        // (35 - 6.504 + 9) / 5 = 7.4992
        // (40 - 7.4992 + 10) / 5 = 8.50016
        let value = smma(&one_to_ten(), Some(9), Some(5)).unwrap();
        assert!((value - 8.50016).abs() < 1e-9);
    }

    #[test]
    fn test_smma_defaults_match_explicit() {
        let series = one_to_ten();
        let explicit = smma(&series, Some(9), Some(5)).unwrap();
        assert_eq!(smma(&series, None, None).unwrap(), explicit);
        assert_eq!(smma(&series, Some(9), None).unwrap(), explicit);
    }

    #[test]
    fn test_smma_tail_of_one() {
        // seed = p[3] = 4, then (5 - 4 + 5) / 1 = 6
        let series = [1.0, 2.0, 4.0, 5.0];
        assert_eq!(smma(&series, Some(3), Some(1)).unwrap(), 6.0);
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(smma(&series, Some(4), Some(1)).unwrap(), 6.0);
    }

    #[test]
    fn test_smma_single_element_fails() {
        assert_eq!(smma(&[1.0], None, None), Err(MovingAverageError::InvalidTail));
    }

    #[test]
    fn test_smma_needs_double_lookback() {
        let series = one_to_ten();
        // (9, 5) and (4, 5) are both valid; (8, 5) needs a seed window ending at 3
        assert!(smma(&series, Some(9), Some(5)).is_ok());
        assert_eq!(
            smma(&series, Some(8), Some(5)),
            Err(MovingAverageError::NotEnoughData)
        );
    }

    #[test]
    fn test_smma_seed_index_out_of_range() {
        // idx - tail = -1 passes the first check but not the seed's index check
        let series = [1.0, 2.0, 3.0];
        assert_eq!(
            smma(&series, Some(1), Some(2)),
            Err(MovingAverageError::InvalidIndex)
        );
    }
}
