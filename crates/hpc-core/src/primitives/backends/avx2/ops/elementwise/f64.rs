//! AVX2 elementwise implementations for f64

use super::scalar;
use crate::primitives::backends::avx2::Avx2Backend;
use std::arch::x86_64::*;

macro_rules! binary_pd {
    ($name:ident, $intrinsic:ident, $tail:path) => {
        /// AVX2 implementation for f64, four lanes per iteration
        #[target_feature(enable = "avx2")]
        pub unsafe fn $name(_backend: &Avx2Backend, a: &[f64], b: &[f64], out: &mut [f64]) {
            let n = a.len().min(b.len()).min(out.len());
            let chunks = n / 4;

            // Main loop - process 4 elements at a time
            for i in 0..chunks {
                let offset = i * 4;
                let va = _mm256_loadu_pd(a.as_ptr().add(offset));
                let vb = _mm256_loadu_pd(b.as_ptr().add(offset));
                _mm256_storeu_pd(out.as_mut_ptr().add(offset), $intrinsic(va, vb));
            }

            // Handle remainder
            let tail = chunks * 4;
            $tail(&a[tail..n], &b[tail..n], &mut out[tail..n]);
        }
    };
}

binary_pd!(add_f64, _mm256_add_pd, scalar::add_scalar);
binary_pd!(mul_f64, _mm256_mul_pd, scalar::mul_scalar);
binary_pd!(div_f64, _mm256_div_pd, scalar::div_scalar);
