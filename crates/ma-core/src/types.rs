//! Floating-point type configuration for conditional compilation
//!
//! This module defines a type alias that can be switched between `f32` and `f64`
//! using cargo features. Default is `f64`.
//!
//! # Example
//!
//! ```rust
//! use ma_core::types::Float;
//!
//! let x: Float = 1.0;
//! let y: Float = 2.0;
//! assert_eq!(x + y, 3.0);
//! ```

/// Floating-point type used throughout the library
///
/// Single precision when the `f32` feature is enabled.
#[cfg(feature = "f32")]
pub type Float = f32;

/// Floating-point type used throughout the library
///
/// Double precision unless the `f32` feature is enabled. This is the default.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// Converts a validated window length into `Float`.
#[inline]
pub(crate) fn from_len(len: usize) -> Float {
    len as Float
}
