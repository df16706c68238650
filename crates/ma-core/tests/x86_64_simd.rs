// x86_64 SIMD integration tests
//
// The dispatched kernels must agree with the scalar reference.

#![cfg(target_arch = "x86_64")]

use ma_core::simd::{self, scalar};

#[test]
fn test_sum_matches_scalar() {
    let data: Vec<f64> = (0..1001).map(|i| i as f64).collect();
    let result = simd::sum(&data);
    assert!((result - scalar::sum(&data)).abs() < 1e-9);
}

#[test]
fn test_dot_product_matches_scalar() {
    let a: Vec<f64> = (0..257).map(|i| (i as f64).sin()).collect();
    let b: Vec<f64> = (0..257).map(|i| (i as f64).cos()).collect();
    let result = simd::dot_product(&a, &b);
    assert!((result - scalar::dot_product(&a, &b)).abs() < 1e-9);
}

#[test]
fn test_dispatch_consistency() {
    let data: Vec<f64> = (0..1000).map(|i| (i as f64).sin()).collect();

    let result1 = simd::sum(&data);
    let result2 = simd::sum(&data);
    assert_eq!(result1, result2);
}

#[test]
fn test_level_reported() {
    let level = simd::dispatch::get_dispatch().level;
    let expected = if std::is_x86_feature_detected!("avx2") {
        simd::SimdLevel::Avx2
    } else {
        simd::SimdLevel::Scalar
    };
    assert_eq!(level, expected);
}
