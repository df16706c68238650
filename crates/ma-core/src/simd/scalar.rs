//! Scalar fallback implementations of the summation kernels.
//!
//! These serve as the portable path when no SIMD acceleration is available,
//! and as the reference the SIMD path is tested against.

use crate::types::Float;
use alloc::vec::Vec;

/// Calculate the sum of all elements in a slice.
///
/// # Examples
///
/// ```rust
/// use ma_core::simd::scalar::sum;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(sum(&data), 15.0);
/// ```
#[inline]
pub fn sum(data: &[Float]) -> Float {
    data.iter().sum()
}

/// Calculate the dot product of two vectors.
///
/// # Panics
///
/// Panics if the input vectors have different lengths.
///
/// # Examples
///
/// ```rust
/// use ma_core::simd::scalar::dot_product;
///
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![4.0, 5.0, 6.0];
/// // (1*4) + (2*5) + (3*6) = 32
/// assert_eq!(dot_product(&a, &b), 32.0);
/// ```
#[inline]
pub fn dot_product(a: &[Float], b: &[Float]) -> Float {
    assert_eq!(
        a.len(),
        b.len(),
        "Dot product requires vectors of equal length"
    );

    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Calculate rolling sums with a specified window size.
///
/// Uses a sliding window: the element leaving the window is subtracted and the
/// one entering is added, so the cost is O(n) regardless of window size.
///
/// # Returns
///
/// A vector of length `data.len() - window_size + 1`, where element `i` is the
/// sum of `data[i..i + window_size]`.
///
/// # Panics
///
/// Panics if `window_size` is 0 or greater than the input data length.
///
/// # Examples
///
/// ```rust
/// use ma_core::simd::rolling_sum;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// // Windows: [1,2,3]=6, [2,3,4]=9, [3,4,5]=12
/// assert_eq!(rolling_sum(&data, 3), vec![6.0, 9.0, 12.0]);
/// ```
#[inline]
pub fn rolling_sum(data: &[Float], window_size: usize) -> Vec<Float> {
    assert!(window_size >= 1, "Window size must be at least 1");
    assert!(
        data.len() >= window_size,
        "Data length must be at least window size"
    );

    let n = data.len();
    let mut result = Vec::with_capacity(n - window_size + 1);

    let mut current_sum = super::dispatch::sum(&data[..window_size]);
    result.push(current_sum);

    for i in window_size..n {
        current_sum -= data[i - window_size];
        current_sum += data[i];
        result.push(current_sum);
    }

    result
}
