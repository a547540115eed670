//! AVX2 elementwise implementations for f32

use super::scalar;
use crate::primitives::backends::avx2::Avx2Backend;
use std::arch::x86_64::*;

macro_rules! binary_ps {
    ($name:ident, $intrinsic:ident, $tail:path) => {
        /// AVX2 implementation for f32, eight lanes per iteration
        #[target_feature(enable = "avx2")]
        pub unsafe fn $name(_backend: &Avx2Backend, a: &[f32], b: &[f32], out: &mut [f32]) {
            let n = a.len().min(b.len()).min(out.len());
            let chunks = n / 8;

            for i in 0..chunks {
                let offset = i * 8;
                let va = _mm256_loadu_ps(a.as_ptr().add(offset));
                let vb = _mm256_loadu_ps(b.as_ptr().add(offset));
                _mm256_storeu_ps(out.as_mut_ptr().add(offset), $intrinsic(va, vb));
            }

            let tail = chunks * 8;
            $tail(&a[tail..n], &b[tail..n], &mut out[tail..n]);
        }
    };
}

binary_ps!(add_f32, _mm256_add_ps, scalar::add_scalar);
binary_ps!(mul_f32, _mm256_mul_ps, scalar::mul_scalar);
binary_ps!(div_f32, _mm256_div_ps, scalar::div_scalar);
