//! f32 accumulation, widened to f64 lanes so the aggregate keeps precision

use super::f64::reduce_pd;
use super::scalar::sum_scalar;
use crate::primitives::backends::avx2::Avx2Backend;
use std::arch::x86_64::*;

const LANES: usize = 4;

/// Sum `data` four elements at a time, each converted to f64 before adding
#[target_feature(enable = "avx2")]
pub unsafe fn sum_f32(_backend: &Avx2Backend, data: &[f32]) -> f64 {
    let body = data.chunks_exact(LANES);
    let tail = body.remainder();

    let mut acc = _mm256_setzero_pd();
    for lanes in body {
        let wide = _mm256_cvtps_pd(_mm_loadu_ps(lanes.as_ptr()));
        acc = _mm256_add_pd(acc, wide);
    }

    reduce_pd(acc) + sum_scalar(tail)
}
