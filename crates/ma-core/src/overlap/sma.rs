//! Implementation of the Simple Moving Average (SMA).

use crate::error::Result;
use crate::window::{resolve_and_validate, Window};
use crate::{simd, types, Float};

/// Mean of an already validated window.
#[inline]
pub(crate) fn mean(series: &[Float], window: Window) -> Float {
    simd::sum(window.slice(series)) / types::from_len(window.len())
}

/// Compute the simple moving average of `series`.
///
/// The result is the arithmetic mean of the `tail` values ending at `idx`.
///
/// # Arguments
///
/// * `idx` - Optional, the index of the last datum to consider
/// * `tail` - Optional, the number of data to consider
///
/// # Example
///
/// ```rust
/// use ma_core::overlap::simple_moving_average;
///
/// let series = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(simple_moving_average(&series, Some(4), Some(5)).unwrap(), 3.0);
/// assert_eq!(simple_moving_average(&series, Some(4), Some(2)).unwrap(), 4.5);
/// ```
pub fn simple_moving_average(
    series: &[Float],
    idx: Option<isize>,
    tail: Option<isize>,
) -> Result<Float> {
    let window = resolve_and_validate(series, idx, tail)?;
    let value = mean(series, window);
    tracing::trace!(idx = window.end(), tail = window.len(), value, "sma");
    Ok(value)
}

/// Alias for [`simple_moving_average`].
#[inline]
pub fn sma(series: &[Float], idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
    simple_moving_average(series, idx, tail)
}
