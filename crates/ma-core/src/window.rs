//! Parameter resolution and window validation
//!
//! Every average is addressed by two optional, signed parameters:
//!
//! - `idx`: index of the last element in the window
//! - `tail`: number of elements in the window
//!
//! They are signed so that negative values can be passed through and rejected
//! with the right error kind instead of being unrepresentable. Validation
//! turns a resolved `(idx, tail)` pair into a [`Window`] whose bounds are
//! guaranteed to lie inside the series.

use core::ops::RangeInclusive;

use crate::error::{MovingAverageError, Result};
use crate::types::Float;

/// A validated window `[end + 1 - len, end]` over a series
///
/// Only [`validate`] constructs a `Window`, so `len >= 1` and
/// `end + 1 >= len` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    end: usize,
    len: usize,
}

impl Window {
    /// Index of the last element in the window.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Index of the first element in the window.
    #[inline]
    pub fn start(&self) -> usize {
        self.end + 1 - self.len
    }

    /// Number of elements in the window (never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Inclusive index range covered by the window.
    #[inline]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start()..=self.end
    }

    /// Borrow the window's elements from `series`.
    ///
    /// # Panics
    ///
    /// Panics if `series` is shorter than the series the window was
    /// validated against.
    #[inline]
    pub fn slice<'a>(&self, series: &'a [Float]) -> &'a [Float] {
        &series[self.range()]
    }
}

/// Signed length of a series, so it can be compared with `idx`.
#[inline]
pub(crate) fn signed_len(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// Fill in omitted parameters.
///
/// An omitted `tail` spans the whole series. An omitted `idx` points at the
/// last element. For an empty series the default `idx` is `-1`, which
/// validation rejects.
///
/// # Example
///
/// ```rust
/// use ma_core::window::resolve_defaults;
///
/// assert_eq!(resolve_defaults(5, None, None), (4, 5));
/// assert_eq!(resolve_defaults(5, Some(2), None), (2, 5));
/// assert_eq!(resolve_defaults(5, None, Some(3)), (4, 3));
/// ```
pub fn resolve_defaults(len: usize, idx: Option<isize>, tail: Option<isize>) -> (isize, isize) {
    let len = signed_len(len);
    (idx.unwrap_or(len - 1), tail.unwrap_or(len))
}

/// Check a resolved `(idx, tail)` pair against a series of `len` elements.
///
/// The checks run in a fixed order and the first failure wins:
///
/// 1. `idx` must lie in `[0, len)`, else [`MovingAverageError::InvalidIndex`]
/// 2. `tail` must be positive, else [`MovingAverageError::InvalidTail`]
/// 3. `idx - tail >= -1`, else [`MovingAverageError::NotEnoughData`]
///
/// # Example
///
/// ```rust
/// use ma_core::{window::validate, MovingAverageError};
///
/// let window = validate(5, 4, 3).unwrap();
/// assert_eq!(window.range(), 2..=4);
///
/// assert_eq!(validate(3, 3, 3), Err(MovingAverageError::InvalidIndex));
/// assert_eq!(validate(3, 1, -1), Err(MovingAverageError::InvalidTail));
/// assert_eq!(validate(3, 1, 3), Err(MovingAverageError::NotEnoughData));
/// ```
pub fn validate(len: usize, idx: isize, tail: isize) -> Result<Window> {
    let result = check(signed_len(len), idx, tail);
    if let Err(err) = result {
        tracing::debug!(len, idx, tail, %err, "rejected moving-average window");
    }
    result
}

fn check(len: isize, idx: isize, tail: isize) -> Result<Window> {
    if idx < 0 || idx >= len {
        return Err(MovingAverageError::InvalidIndex);
    }
    if tail <= 0 {
        return Err(MovingAverageError::InvalidTail);
    }
    if idx - tail < -1 {
        return Err(MovingAverageError::NotEnoughData);
    }
    Ok(Window {
        end: idx as usize,
        len: tail as usize,
    })
}

/// Resolve omitted parameters with [`resolve_defaults`] and [`validate`] the
/// result against `series`.
///
/// # Example
///
/// ```rust
/// use ma_core::resolve_and_validate;
///
/// let series = [1.0, 2.0, 3.0, 4.0];
/// let window = resolve_and_validate(&series, None, None).unwrap();
/// assert_eq!(window.slice(&series), &series[..]);
/// ```
pub fn resolve_and_validate(
    series: &[Float],
    idx: Option<isize>,
    tail: Option<isize>,
) -> Result<Window> {
    let (idx, tail) = resolve_defaults(series.len(), idx, tail);
    validate(series.len(), idx, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_span_whole_series() {
        assert_eq!(resolve_defaults(10, None, None), (9, 10));
    }

    #[test]
    fn test_defaults_keep_explicit_values() {
        assert_eq!(resolve_defaults(10, Some(3), Some(2)), (3, 2));
        assert_eq!(resolve_defaults(10, Some(-4), Some(0)), (-4, 0));
    }

    #[test]
    fn test_defaults_for_empty_series() {
        assert_eq!(resolve_defaults(0, None, None), (-1, 0));
        assert_eq!(
            resolve_and_validate(&[], None, None),
            Err(MovingAverageError::InvalidIndex)
        );
    }

    #[test]
    fn test_validate_index_bounds() {
        assert_eq!(validate(3, -1, 3), Err(MovingAverageError::InvalidIndex));
        assert_eq!(validate(3, 3, 3), Err(MovingAverageError::InvalidIndex));
        assert!(validate(3, 0, 1).is_ok());
        assert!(validate(3, 2, 1).is_ok());
    }

    #[test]
    fn test_validate_index_checked_before_tail() {
        assert_eq!(validate(3, 7, -2), Err(MovingAverageError::InvalidIndex));
    }

    #[test]
    fn test_validate_tail_checked_before_data() {
        assert_eq!(validate(3, 1, 0), Err(MovingAverageError::InvalidTail));
        assert_eq!(validate(3, 1, -5), Err(MovingAverageError::InvalidTail));
    }

    #[test]
    fn test_validate_not_enough_data() {
        assert_eq!(validate(3, 1, 3), Err(MovingAverageError::NotEnoughData));
        assert_eq!(validate(3, 0, 2), Err(MovingAverageError::NotEnoughData));
        // idx - tail == -1 is the boundary: the window starts at index 0
        assert!(validate(3, 1, 2).is_ok());
    }

    #[test]
    fn test_window_bounds() {
        let window = validate(10, 7, 3).unwrap();
        assert_eq!(window.start(), 5);
        assert_eq!(window.end(), 7);
        assert_eq!(window.len(), 3);
        assert!(!window.is_empty());
        assert_eq!(window.range(), 5..=7);
    }

    #[test]
    fn test_window_slice() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let window = validate(series.len(), 3, 2).unwrap();
        assert_eq!(window.slice(&series), &[3.0, 4.0]);
    }
}
