use crate::types::Float;

#[cfg(not(feature = "f32"))]
type SimdVec = wide::f64x4;

#[cfg(feature = "f32")]
type SimdVec = wide::f32x8;

#[cfg(not(feature = "f32"))]
const LANES: usize = 4;

#[cfg(feature = "f32")]
const LANES: usize = 8;

#[inline(always)]
fn load(chunk: &[Float]) -> SimdVec {
    let lanes: [Float; LANES] = core::array::from_fn(|i| chunk[i]);
    SimdVec::from(lanes)
}

/// # Safety
///
/// The CPU must support AVX2.
#[inline(never)]
#[target_feature(enable = "avx2")]
pub unsafe fn sum(data: &[Float]) -> Float {
    let chunks = data.chunks_exact(LANES);
    let remainder = chunks.remainder();

    let mut acc = SimdVec::ZERO;
    for chunk in chunks {
        acc += load(chunk);
    }

    let mut sum = acc.reduce_add();
    for &x in remainder {
        sum += x;
    }
    sum
}

/// # Safety
///
/// The CPU must support AVX2.
///
/// # Panics
///
/// Panics if `a` and `b` have different lengths.
#[inline(never)]
#[target_feature(enable = "avx2")]
pub unsafe fn dot_product(a: &[Float], b: &[Float]) -> Float {
    assert_eq!(
        a.len(),
        b.len(),
        "Dot product requires vectors of equal length"
    );

    let chunks_a = a.chunks_exact(LANES);
    let chunks_b = b.chunks_exact(LANES);
    let remainder_a = chunks_a.remainder();
    let remainder_b = chunks_b.remainder();

    let mut acc = SimdVec::ZERO;
    for (chunk_a, chunk_b) in chunks_a.zip(chunks_b) {
        acc += load(chunk_a) * load(chunk_b);
    }

    let mut sum = acc.reduce_add();
    for (&x, &y) in remainder_a.iter().zip(remainder_b) {
        sum += x * y;
    }
    sum
}
