//! Maps each element type onto its AVX2 loops at compile time

use super::ops::{Elementwise, Sum};
use super::Avx2Backend;
use crate::Numeric;

/// Element types with AVX2 loops for every primitive
///
/// # Safety
/// The `*_impl` functions execute AVX2 instructions; callers must hold an
/// `Avx2Backend`, which is only constructible on CPUs that support them.
pub trait Avx2TypeDispatch: Numeric + Elementwise<Self> + Sum<Self> {
    /// Lanes per 256-bit register
    const LANES: usize;

    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        Self::LANES
    }

    unsafe fn add_impl(backend: &Avx2Backend, a: &[Self], b: &[Self], out: &mut [Self]) {
        <Self as Elementwise<Self>>::add(backend, a, b, out)
    }

    unsafe fn mul_impl(backend: &Avx2Backend, a: &[Self], b: &[Self], out: &mut [Self]) {
        <Self as Elementwise<Self>>::mul(backend, a, b, out)
    }

    unsafe fn div_impl(backend: &Avx2Backend, a: &[Self], b: &[Self], out: &mut [Self]) {
        <Self as Elementwise<Self>>::div(backend, a, b, out)
    }

    unsafe fn sum_impl(backend: &Avx2Backend, data: &[Self]) -> Self::Aggregate {
        <Self as Sum<Self>>::compute(backend, data)
    }
}

impl Avx2TypeDispatch for f32 {
    const LANES: usize = 8;
}

impl Avx2TypeDispatch for f64 {
    const LANES: usize = 4;
}
