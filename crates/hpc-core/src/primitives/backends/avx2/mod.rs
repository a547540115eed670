//! AVX2 backend
//!
//! Loops live in `ops`, one module per operation and one file per element
//! type; `dispatch` maps each element type onto them at compile time. Builds
//! without the `avx2` feature (or off x86_64) keep the type so code naming it
//! still compiles, but it cannot be constructed.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod dispatch;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod ops;

use crate::primitives::ComputePrimitives;
use crate::Numeric;

/// AVX2 loops for x86_64
///
/// Holding a value is proof that the running CPU supports AVX2: the only
/// constructors are [`Avx2Backend::try_new`] and [`Avx2Backend::new`], both of
/// which check first.
///
/// ```compile_fail
/// let backend = hpc_core::Avx2Backend;
/// ```
///
/// ```compile_fail
/// let backend = hpc_core::Avx2Backend { _detected: () };
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend {
    _detected: (),
}

impl Avx2Backend {
    /// Create the backend
    ///
    /// # Panics
    /// Panics if this build lacks the `avx2` feature or the CPU lacks AVX2.
    /// Use [`Avx2Backend::try_new`] to probe instead.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        match Self::try_new() {
            Some(backend) => backend,
            None => panic!("AVX2 backend requested but unavailable on this build or CPU"),
        }
    }

    /// Create the backend if this build and CPU support it
    pub fn try_new() -> Option<Self> {
        Self::is_available().then_some(Self { _detected: () })
    }

    /// Whether this build and CPU support AVX2
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl<T> ComputePrimitives<T> for Avx2Backend
where
    T: Numeric + self::dispatch::Avx2TypeDispatch,
{
    fn backend_name(&self) -> &'static str {
        T::backend_name()
    }

    fn simd_width(&self) -> usize {
        T::simd_width()
    }

    fn add_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        check_shapes(a, b, out);
        // SAFETY: a value of Avx2Backend exists only after AVX2 was detected
        unsafe { T::add_impl(self, a, b, out) }
    }

    fn mul_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        check_shapes(a, b, out);
        // SAFETY: as above
        unsafe { T::mul_impl(self, a, b, out) }
    }

    fn div_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        check_shapes(a, b, out);
        // SAFETY: as above
        unsafe { T::div_impl(self, a, b, out) }
    }

    fn sum(&self, data: &[T]) -> T::Aggregate {
        // SAFETY: as above
        unsafe { T::sum_impl(self, data) }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
#[inline]
fn check_shapes<T>(a: &[T], b: &[T], out: &[T]) {
    debug_assert!(
        a.len() == b.len() && a.len() == out.len(),
        "avx2 elementwise: lengths {} / {} / {} differ",
        a.len(),
        b.len(),
        out.len()
    );
}

#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl<T: Numeric> ComputePrimitives<T> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_requires_detection() {
        assert_eq!(Avx2Backend::try_new().is_some(), Avx2Backend::is_available());
    }

    #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
    #[test]
    fn test_unavailable_without_feature() {
        assert!(!Avx2Backend::is_available());
        assert!(Avx2Backend::try_new().is_none());
    }
}
