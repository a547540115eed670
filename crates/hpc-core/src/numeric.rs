//! Numeric element types the kernels operate on
//!
//! Buffers are plain old data so they can be zero-initialised and copied
//! without running constructors; arithmetic comes from `num_traits::Float`,
//! which pins elementwise division to IEEE-754 semantics.

use bytemuck::Pod;
use num_traits::Float;
use std::fmt::Debug;

/// Base trait for element types accepted by the kernels
pub trait Numeric: Pod + Float + Debug + Default + Send + Sync {
    /// Type used for aggregate operations (sums of partial results)
    type Aggregate: Float + From<Self> + Into<f64> + Send + Sync + std::ops::AddAssign;
}

impl Numeric for f64 {
    type Aggregate = f64;
}

// f32 partial sums are widened so long reductions keep their precision
impl Numeric for f32 {
    type Aggregate = f64;
}
