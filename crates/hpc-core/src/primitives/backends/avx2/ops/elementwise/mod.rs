//! Elementwise binary operations for AVX2 backend
//!
//! Computes out[i] = a[i] op b[i] for add, multiply and divide. Each lane is a
//! single IEEE-754 operation, so results match the scalar backend bit for bit.

mod f32;
mod f64;
mod scalar;

use crate::{primitives::backends::avx2::Avx2Backend, Numeric};

/// Trait for elementwise operations
pub trait Elementwise<T: Numeric> {
    unsafe fn add(backend: &Avx2Backend, a: &[T], b: &[T], out: &mut [T]);
    unsafe fn mul(backend: &Avx2Backend, a: &[T], b: &[T], out: &mut [T]);
    unsafe fn div(backend: &Avx2Backend, a: &[T], b: &[T], out: &mut [T]);
}

impl Elementwise<f64> for f64 {
    unsafe fn add(backend: &Avx2Backend, a: &[f64], b: &[f64], out: &mut [f64]) {
        f64::add_f64(backend, a, b, out)
    }

    unsafe fn mul(backend: &Avx2Backend, a: &[f64], b: &[f64], out: &mut [f64]) {
        f64::mul_f64(backend, a, b, out)
    }

    unsafe fn div(backend: &Avx2Backend, a: &[f64], b: &[f64], out: &mut [f64]) {
        f64::div_f64(backend, a, b, out)
    }
}

impl Elementwise<f32> for f32 {
    unsafe fn add(backend: &Avx2Backend, a: &[f32], b: &[f32], out: &mut [f32]) {
        f32::add_f32(backend, a, b, out)
    }

    unsafe fn mul(backend: &Avx2Backend, a: &[f32], b: &[f32], out: &mut [f32]) {
        f32::mul_f32(backend, a, b, out)
    }

    unsafe fn div(backend: &Avx2Backend, a: &[f32], b: &[f32], out: &mut [f32]) {
        f32::div_f32(backend, a, b, out)
    }
}
