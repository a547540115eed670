//! Concrete backends and runtime backend selection

pub mod avx2;
pub mod scalar;

pub use avx2::Avx2Backend;
pub use scalar::ScalarBackend;

use super::ComputePrimitives;
use crate::Numeric;

/// AVX2 where this build and CPU support it, scalar otherwise
///
/// Selection happens once, when the value is built; every call after that is
/// a single branch on the variant.
#[derive(Clone, Copy, Debug)]
pub enum AutoBackend {
    Avx2(Avx2Backend),
    Scalar(ScalarBackend),
}

impl AutoBackend {
    /// Probe the CPU and pick the fastest available backend
    pub fn detect() -> Self {
        let backend = match Avx2Backend::try_new() {
            Some(avx2) => Self::Avx2(avx2),
            None => Self::Scalar(ScalarBackend),
        };
        log::debug!("selected {} backend", backend.name());
        backend
    }

    /// The portable fallback, regardless of what the CPU supports
    pub fn scalar() -> Self {
        Self::Scalar(ScalarBackend)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Avx2(_) => "avx2",
            Self::Scalar(_) => "scalar",
        }
    }
}

impl Default for AutoBackend {
    fn default() -> Self {
        Self::detect()
    }
}

macro_rules! delegate {
    ($self:ident, $backend:ident => $call:expr) => {
        match $self {
            AutoBackend::Avx2($backend) => $call,
            AutoBackend::Scalar($backend) => $call,
        }
    };
}

impl<T> ComputePrimitives<T> for AutoBackend
where
    T: Numeric,
    Avx2Backend: ComputePrimitives<T>,
{
    fn backend_name(&self) -> &'static str {
        delegate!(self, b => ComputePrimitives::<T>::backend_name(b))
    }

    fn simd_width(&self) -> usize {
        delegate!(self, b => ComputePrimitives::<T>::simd_width(b))
    }

    fn add_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        delegate!(self, p => ComputePrimitives::<T>::add_into(p, a, b, out))
    }

    fn mul_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        delegate!(self, p => ComputePrimitives::<T>::mul_into(p, a, b, out))
    }

    fn div_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        delegate!(self, p => ComputePrimitives::<T>::div_into(p, a, b, out))
    }

    fn sum(&self, data: &[T]) -> T::Aggregate {
        delegate!(self, p => ComputePrimitives::<T>::sum(p, data))
    }
}

/// Best backend for this build and CPU
pub fn best_available_backend() -> AutoBackend {
    AutoBackend::detect()
}
