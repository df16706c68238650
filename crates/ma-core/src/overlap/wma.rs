//! Implementation of the Weighted Moving Average (WMA).
//!
//! Formally, the WMA is computed as `n / d`, where
//!
//! ```text
//! n = z p_M + (z - 1) p_(M - 1) + (z - 2) p_(M - 2) + ...
//! d = z + (z - 1) + (z - 2) + ... = z (z + 1) / 2
//! ```

use aligned_vec::{AVec, CACHELINE_ALIGN};

use crate::error::Result;
use crate::window::resolve_and_validate;
use crate::{simd, types, Float};

/// Weights `1, 2, ..., tail` in chronological order.
fn linear_weights(tail: usize) -> AVec<Float> {
    AVec::from_iter(CACHELINE_ALIGN, (1..=tail).map(types::from_len))
}

/// The `tail`-th triangular number.
#[inline]
fn triangular(tail: usize) -> Float {
    let tail = types::from_len(tail);
    tail * (tail + 1.0) / 2.0
}

/// Compute the weighted moving average of `series`.
///
/// The most recent value gets weight `tail`, decreasing linearly to `1` for
/// the oldest value in the window.
///
/// # Arguments
///
/// * `idx` - Optional, the index of the last datum to consider
/// * `tail` - Optional, the number of data to consider
///
/// # Example
///
/// ```rust
/// use ma_core::overlap::weighted_moving_average;
///
/// let series = [1.0, 2.0, 3.0];
/// // (1*1 + 2*2 + 3*3) / 6
/// let wma = weighted_moving_average(&series, None, None).unwrap();
/// assert!((wma - 14.0 / 6.0).abs() < 1e-12);
/// ```
pub fn weighted_moving_average(
    series: &[Float],
    idx: Option<isize>,
    tail: Option<isize>,
) -> Result<Float> {
    let window = resolve_and_validate(series, idx, tail)?;
    let weights = linear_weights(window.len());
    let value = simd::dot_product(&weights, window.slice(series)) / triangular(window.len());
    tracing::trace!(idx = window.end(), tail = window.len(), value, "wma");
    Ok(value)
}

/// Alias for [`weighted_moving_average`].
#[inline]
pub fn wma(series: &[Float], idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
    weighted_moving_average(series, idx, tail)
}
