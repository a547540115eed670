//! Elementwise vector arithmetic kernels
//!
//! [`VectorKernel`] computes `c[i] = a[i] ⊕ b[i]` for the operators in
//! [`ElementwiseOp`], validating lengths before touching any output and
//! dispatching the inner loop to the engine's compute primitives (scalar or
//! AVX2). Parallel engines split long inputs into independent chunks.
//!
//! # Example
//!
//! ```rust
//! use hpc_core::scalar_sequential;
//! use hpc_vector::{ElementwiseOp, VectorKernel};
//!
//! let kernel = VectorKernel::new(scalar_sequential());
//! let c = kernel.apply(ElementwiseOp::Add, &[1.0, 2.0], &[3.0, 4.0]).unwrap();
//! assert_eq!(c, vec![4.0, 6.0]);
//! ```

pub mod kernel;
pub mod op;

pub use kernel::VectorKernel;
pub use op::ElementwiseOp;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ElementwiseOp, VectorKernel};
}
