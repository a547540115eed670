//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Generate array lengths that test edge cases for SIMD operations
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        2,   // Half an AVX2 f64 register
        3,   // AVX2 f64 width - 1
        4,   // AVX2 f64 width
        5,   // AVX2 f64 width + 1
        7,   // AVX2 f64 width - 1 + remainder
        8,   // AVX2 f32 width
        9,   // AVX2 f32 width + 1
        15,  // Multiple of no SIMD width
        16,  // Power of 2
        17,  // Power of 2 + 1
        31,  // Prime
        64,  // Cache line
        100, // Round number
        127, // Mersenne prime
        128, // Power of 2
    ]
}

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        std::f64::consts::PI,
        1e-308, // Near underflow
        1e308,  // Near overflow
    ]
}

/// Assert two vectors are identical bit for bit (NaN payloads included)
pub fn assert_bitwise_equal(actual: &[f64], expected: &[f64], op: &str, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{} length mismatch for {}",
        op,
        context
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.to_bits() == e.to_bits() || (a.is_nan() && e.is_nan()),
            "{op} differs at index {i} for {context}: {a:?} vs {e:?}"
        );
    }
}

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.1).collect()
}

/// Generate complementary test data for binary operations
pub fn generate_test_data_complement(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.2).collect()
}
