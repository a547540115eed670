//! Scalar fallback implementation for sum

use crate::Numeric;
use num_traits::Zero;

/// Scalar implementation of sum, accumulated in the aggregate type
pub fn sum_scalar<T: Numeric>(data: &[T]) -> T::Aggregate {
    let mut sum = <T::Aggregate as Zero>::zero();

    for &val in data {
        sum += <T::Aggregate as From<T>>::from(val);
    }

    sum
}
