//! Runtime SIMD dispatch.
//!
//! The best implementation is selected once, on first use, and stored as a
//! table of function pointers. Without `std` there is no CPU detection and the
//! scalar kernels are called directly.

#[cfg(feature = "std")]
use std::sync::OnceLock;

use core::fmt;

use super::scalar;
use crate::types::Float;

/// Function pointer type for sum operations.
pub type SumFn = fn(&[Float]) -> Float;

/// Function pointer type for dot product operations.
pub type DotProductFn = fn(&[Float], &[Float]) -> Float;

/// Instruction set a [`DispatchTable`] was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SimdLevel {
    /// No SIMD acceleration
    Scalar,
    /// AVX2 on x86_64
    Avx2,
}

impl fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdLevel::Scalar => write!(f, "Scalar"),
            SimdLevel::Avx2 => write!(f, "AVX2"),
        }
    }
}

/// Dispatch table containing function pointers for all kernels.
#[derive(Debug, Clone, Copy)]
pub struct DispatchTable {
    /// Instruction set backing the pointers below
    pub level: SimdLevel,
    /// Function pointer for sum operations
    pub sum: SumFn,
    /// Function pointer for dot product operations
    pub dot_product: DotProductFn,
}

impl DispatchTable {
    /// Create a scalar dispatch table (no SIMD acceleration).
    #[inline]
    pub const fn scalar() -> Self {
        Self {
            level: SimdLevel::Scalar,
            sum: scalar::sum,
            dot_product: scalar::dot_product,
        }
    }
}

#[cfg(feature = "std")]
static DISPATCH: OnceLock<DispatchTable> = OnceLock::new();

#[cfg(not(feature = "std"))]
static SCALAR: DispatchTable = DispatchTable::scalar();

/// Detection priority on x86_64 is AVX2, then scalar. Every other target uses
/// the scalar kernels.
#[cfg(feature = "std")]
#[cold]
fn init_dispatch() -> DispatchTable {
    #[cfg(target_arch = "x86_64")]
    {
        use super::arch::x86_64::avx2;

        if std::is_x86_feature_detected!("avx2") {
            tracing::debug!(level = %SimdLevel::Avx2, "selected summation kernels");
            return DispatchTable {
                level: SimdLevel::Avx2,
                // SAFETY: AVX2 support was detected above.
                sum: |data| unsafe { avx2::sum(data) },
                dot_product: |a, b| unsafe { avx2::dot_product(a, b) },
            };
        }
    }

    tracing::debug!(level = %SimdLevel::Scalar, "selected summation kernels");
    DispatchTable::scalar()
}

/// Get the global dispatch table, initializing it if necessary.
#[inline]
pub fn get_dispatch() -> &'static DispatchTable {
    #[cfg(feature = "std")]
    {
        DISPATCH.get_or_init(init_dispatch)
    }
    #[cfg(not(feature = "std"))]
    {
        &SCALAR
    }
}

/// Calculate the sum of all elements in a slice.
///
/// # Examples
///
/// ```rust
/// use ma_core::simd::dispatch;
///
/// let data = vec![1.0, 2.0, 3.0];
/// assert_eq!(dispatch::sum(&data), 6.0);
/// ```
#[inline]
pub fn sum(data: &[Float]) -> Float {
    (get_dispatch().sum)(data)
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
/// use ma_core::simd::dispatch;
///
/// let a = vec![1.0, 2.0, 3.0];
/// let b = vec![4.0, 5.0, 6.0];
/// assert_eq!(dispatch::dot_product(&a, &b), 32.0);
/// ```
#[inline]
pub fn dot_product(a: &[Float], b: &[Float]) -> Float {
    (get_dispatch().dot_product)(a, b)
}
