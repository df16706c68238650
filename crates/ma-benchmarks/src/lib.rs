//! Shared inputs for the moving-average benchmarks.

use ma_core::Float;

/// Series sizes every benchmark group sweeps over.
pub const SIZES: [usize; 5] = [10, 100, 1_000, 10_000, 100_000];

/// A deterministic, price-like series of `size` values.
pub fn price_series(size: usize) -> Vec<Float> {
    (0..size)
        .map(|i| {
            let i = i as Float;
            100.0 + (i * 0.1).sin() * 5.0 + i * 0.01
        })
        .collect()
}
