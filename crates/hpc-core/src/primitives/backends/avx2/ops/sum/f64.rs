//! Four-lane f64 accumulation

use super::scalar::sum_scalar;
use crate::primitives::backends::avx2::Avx2Backend;
use std::arch::x86_64::*;

const LANES: usize = 4;

/// Sum `data` in one four-lane accumulator, then add the scalar tail
#[target_feature(enable = "avx2")]
pub unsafe fn sum_f64(_backend: &Avx2Backend, data: &[f64]) -> f64 {
    let body = data.chunks_exact(LANES);
    let tail = body.remainder();

    let mut acc = _mm256_setzero_pd();
    for lanes in body {
        acc = _mm256_add_pd(acc, _mm256_loadu_pd(lanes.as_ptr()));
    }

    reduce_pd(acc) + sum_scalar(tail)
}

/// Add the four lanes of `v`
#[inline]
#[target_feature(enable = "avx2")]
pub(super) unsafe fn reduce_pd(v: __m256d) -> f64 {
    let pair = _mm_add_pd(_mm256_castpd256_pd128(v), _mm256_extractf128_pd(v, 1));
    let high = _mm_unpackhi_pd(pair, pair);
    _mm_cvtsd_f64(_mm_add_sd(pair, high))
}
