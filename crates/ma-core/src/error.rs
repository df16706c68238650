//! Error types for moving-average computations
//!
//! Every failure is a rejection of caller input, detected before any
//! arithmetic runs. Nothing is retried or recovered internally.

use thiserror::Error;

/// Error type for moving-average operations
///
/// All averages return `Result<Float, MovingAverageError>`. The variants carry
/// no payload; their messages are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MovingAverageError {
    /// `idx` lies outside `[0, series.len())`
    #[error("Given idx is outside the series.")]
    InvalidIndex,

    /// `tail` is zero or negative
    #[error("Given tail is <= 0.")]
    InvalidTail,

    /// The window would start before index 0
    #[error("Given tail is too large for idx.")]
    NotEnoughData,
}

/// Result type alias for moving-average operations
///
/// # Example
///
/// ```rust
/// use ma_core::error::{MovingAverageError, Result};
///
/// fn first(series: &[f64]) -> Result<f64> {
///     series.first().copied().ok_or(MovingAverageError::InvalidIndex)
/// }
///
/// assert_eq!(first(&[]), Err(MovingAverageError::InvalidIndex));
/// ```
pub type Result<T> = core::result::Result<T, MovingAverageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(
            MovingAverageError::InvalidIndex.to_string(),
            "Given idx is outside the series."
        );
        assert_eq!(
            MovingAverageError::InvalidTail.to_string(),
            "Given tail is <= 0."
        );
        assert_eq!(
            MovingAverageError::NotEnoughData.to_string(),
            "Given tail is too large for idx."
        );
    }

    #[test]
    fn test_error_is_debug() {
        let debug_str = format!("{:?}", MovingAverageError::NotEnoughData);
        assert!(debug_str.contains("NotEnoughData"));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner(tail: isize) -> Result<isize> {
            if tail <= 0 {
                return Err(MovingAverageError::InvalidTail);
            }
            Ok(tail)
        }

        fn outer(tail: isize) -> Result<isize> {
            let tail = inner(tail)?;
            Ok(tail * 2)
        }

        assert_eq!(outer(3), Ok(6));
        assert_eq!(outer(0), Err(MovingAverageError::InvalidTail));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_boxes_into_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(MovingAverageError::InvalidIndex);
        assert_eq!(boxed.to_string(), "Given idx is outside the series.");
        assert!(boxed.source().is_none());
    }
}
