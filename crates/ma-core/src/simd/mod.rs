//! # Summation kernels
//!
//! Every moving average reduces to a plain sum or a weighted sum of its
//! window. This module provides those reductions with a SIMD path and a
//! scalar fallback.
//!
//! ## Usage
//!
//! Functions are dispatched to the best available implementation at runtime
//! (x86_64 with `std`) or fall back to scalar code.
//!
//! ```rust
//! use ma_core::simd;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0];
//! assert_eq!(simd::sum(&data), 10.0);
//! assert_eq!(simd::dot_product(&data, &[1.0, 1.0, 1.0, 1.0]), 10.0);
//! ```
//!
//! ## Performance Considerations
//!
//! - For very small windows, scalar operations may be faster due to SIMD overhead
//! - Results of the SIMD and scalar paths may differ in the last bits, since
//!   lanes are reduced in a different order
pub mod scalar;
#[cfg(feature = "std")]
pub(crate) mod arch;
pub mod dispatch;

pub use dispatch::{dot_product, sum, SimdLevel};
pub use scalar::rolling_sum;
