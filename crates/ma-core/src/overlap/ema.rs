//! Implementation of the Exponential Moving Average (EMA).
//!
//! Formally, the EMA is computed as `n / d`, where
//!
//! ```text
//! n = p_1 + (1 - alpha) p_2 + (1 - alpha)^2 p_3 + ... + (1 - alpha)^z p_(z + 1)
//! d = 1 + (1 - alpha) + (1 - alpha)^2 + ... + (1 - alpha)^z
//! alpha = 2 / (z + 1)
//! ```
//!
//! and `p_1` is the most recent value. Normalizing by `d` means the weights
//! need not sum to one on their own.

use aligned_vec::{AVec, CACHELINE_ALIGN};

use crate::error::Result;
use crate::window::resolve_and_validate;
use crate::{simd, types, Float};

/// Weights in chronological order: the newest element gets 1 and every
/// older element is scaled by a further `1 - alpha`.
fn decay_weights(tail: usize) -> AVec<Float> {
    let alpha = 2.0 / (types::from_len(tail) + 1.0);
    let decay = 1.0 - alpha;
    let mut weights = AVec::from_iter(
        CACHELINE_ALIGN,
        core::iter::successors(Some(1.0 as Float), |w| Some(w * decay)).take(tail),
    );
    weights.reverse();
    weights
}

/// Compute the exponential moving average of `series`.
///
/// # Arguments
///
/// * `idx` - Optional, the index of the last datum to consider
/// * `tail` - Optional, the number of data to consider
///
/// # Example
///
/// ```rust
/// use ma_core::overlap::exponential_moving_average;
///
/// let series = [1.0, 2.0, 3.0];
/// // alpha = 0.5: (3 + 0.5 * 2 + 0.25 * 1) / 1.75
/// let ema = exponential_moving_average(&series, None, None).unwrap();
/// assert!((ema - 4.25 / 1.75).abs() < 1e-12);
/// ```
pub fn exponential_moving_average(
    series: &[Float],
    idx: Option<isize>,
    tail: Option<isize>,
) -> Result<Float> {
    let window = resolve_and_validate(series, idx, tail)?;
    let weights = decay_weights(window.len());
    let value = simd::dot_product(&weights, window.slice(series)) / simd::sum(&weights);
    tracing::trace!(idx = window.end(), tail = window.len(), value, "ema");
    Ok(value)
}

/// Alias for [`exponential_moving_average`].
#[inline]
pub fn ema(series: &[Float], idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
    exponential_moving_average(series, idx, tail)
}
