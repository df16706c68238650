//! Extension trait for computing moving averages directly on a series
//!
//! [`MovingAverage`] is implemented for every type that can be viewed as a
//! slice of [`Float`]: slices, arrays, `Vec`, boxed slices and so on. Each
//! method forwards to the matching function in [`crate::overlap`], so default
//! resolution and validation order are identical.
//!
//! # Example
//!
//! ```rust
//! use ma_core::MovingAverage;
//!
//! let prices = vec![1.2900, 1.2900, 1.2903, 1.2904];
//! let wma = prices.weighted_moving_average(Some(3), Some(4)).unwrap();
//! assert!((wma - 1.29025).abs() < 1e-12);
//! assert_eq!(prices.wma(None, None), Ok(wma));
//! ```

use crate::error::Result;
use crate::overlap;
use crate::types::Float;

/// Moving averages over an ordered series of [`Float`] values.
///
/// `idx` is the index of the last datum to consider and `tail` the number of
/// data to consider. Either may be omitted.
pub trait MovingAverage {
    /// The series the averages are computed over.
    fn series(&self) -> &[Float];

    /// Simple moving average; see [`overlap::simple_moving_average`].
    fn simple_moving_average(&self, idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
        overlap::simple_moving_average(self.series(), idx, tail)
    }

    /// Exponential moving average; see [`overlap::exponential_moving_average`].
    fn exponential_moving_average(
        &self,
        idx: Option<isize>,
        tail: Option<isize>,
    ) -> Result<Float> {
        overlap::exponential_moving_average(self.series(), idx, tail)
    }

    /// Smoothed moving average; see [`overlap::smoothed_moving_average`].
    fn smoothed_moving_average(&self, idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
        overlap::smoothed_moving_average(self.series(), idx, tail)
    }

    /// Weighted moving average; see [`overlap::weighted_moving_average`].
    fn weighted_moving_average(&self, idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
        overlap::weighted_moving_average(self.series(), idx, tail)
    }

    /// Alias for [`MovingAverage::simple_moving_average`].
    fn sma(&self, idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
        self.simple_moving_average(idx, tail)
    }

    /// Alias for [`MovingAverage::exponential_moving_average`].
    fn ema(&self, idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
        self.exponential_moving_average(idx, tail)
    }

    /// Alias for [`MovingAverage::smoothed_moving_average`].
    fn smma(&self, idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
        self.smoothed_moving_average(idx, tail)
    }

    /// Alias for [`MovingAverage::weighted_moving_average`].
    fn wma(&self, idx: Option<isize>, tail: Option<isize>) -> Result<Float> {
        self.weighted_moving_average(idx, tail)
    }
}

impl<S> MovingAverage for S
where
    S: AsRef<[Float]> + ?Sized,
{
    #[inline]
    fn series(&self) -> &[Float] {
        self.as_ref()
    }
}
