//! MA-Core: simple, exponential, smoothed and weighted moving averages
//!
//! This crate computes a single moving-average value over a window of an
//! ordered series, addressed by the index of its last element (`idx`) and its
//! length (`tail`). Both parameters are optional and resolve to defaults
//! derived from the series length.
//!
//! # Features
//!
//! - `std` (default): runtime SIMD detection and `std::error::Error`
//! - `f64` (default): Double-precision floating-point
//! - `f32`: Single-precision floating-point
//!
//! # Modules
//!
//! - [`types`]: Floating-point type configuration
//! - [`error`]: Error type shared by every average
//! - [`window`]: Parameter resolution and window validation
//! - [`overlap`]: The four moving averages
//! - [`traits`]: Extension trait over series types
//! - [`kind`]: Runtime selection of an average by name
//! - [`simd`]: Summation kernels
//!
//! # Example
//!
//! ```rust
//! use ma_core::{overlap, MovingAverage};
//!
//! let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(overlap::simple_moving_average(&prices, Some(4), Some(5)).unwrap(), 3.0);
//! assert_eq!(prices.sma(None, None).unwrap(), 3.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod error;
pub mod kind;
pub mod overlap;
pub mod simd;
pub mod traits;
pub mod types;
pub mod window;

pub use error::{MovingAverageError, Result};
pub use kind::{MovingAverageKind, ParseKindError};
pub use traits::MovingAverage;
pub use types::Float;
pub use window::{resolve_and_validate, Window};
