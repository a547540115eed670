//! Unified generic compute primitives trait

use crate::numeric::Numeric;
use num_traits::Zero;

/// Unified trait for computational primitives with generic numeric support
///
/// This trait provides low-level operations optimized for different backends
/// (scalar, AVX2) with compile-time dispatch.
///
/// The elementwise operations write into a caller-supplied output slice and
/// do not validate lengths: kernels check `a`, `b` and `out` agree before
/// calling into a backend, and backends only `debug_assert!` it.
pub trait ComputePrimitives<T: Numeric = f64>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of elements processed in parallel)
    fn simd_width(&self) -> usize {
        1
    }

    /// out[i] = a[i] + b[i]
    fn add_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");
        debug_assert_eq!(a.len(), out.len(), "Output must match operand length");
        for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
            *o = x + y;
        }
    }

    /// out[i] = a[i] * b[i]
    fn mul_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");
        debug_assert_eq!(a.len(), out.len(), "Output must match operand length");
        for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
            *o = x * y;
        }
    }

    /// out[i] = a[i] / b[i], IEEE-754 division (x / 0 is ±inf or NaN)
    fn div_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");
        debug_assert_eq!(a.len(), out.len(), "Output must match operand length");
        for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
            *o = x / y;
        }
    }

    /// Sum all elements in a slice
    fn sum(&self, data: &[T]) -> T::Aggregate {
        data.iter()
            .map(|&x| <T::Aggregate as From<T>>::from(x))
            .fold(<T::Aggregate as Zero>::zero(), |acc, x| acc + x)
    }
}
