//! Native numeric kernels behind a marshalling call boundary
//!
//! - `compute_pi(N)`: π by an N-partition Riemann sum of 4 / (1 + x²)
//! - `vecadd`, `vecmul`, `vecdiv`: elementwise arithmetic over equal-length
//!   sequences
//! - [`Particle`]: the plain value type exchanged for simulations
//!
//! Each call marshals its host operands into call-scoped aligned buffers,
//! runs one kernel, and copies the result back; nothing survives the call.
//!
//! # Quick Start
//!
//! ```rust
//! use hpc_kernels::prelude::*;
//!
//! let pi = compute_pi(10).unwrap();
//! assert!((pi - 3.3311788072817965).abs() < 1e-12);
//!
//! let c = vecmul(&[2.0, 3.0], &[4.0, 5.0]).unwrap();
//! assert_eq!(c, vec![8.0, 15.0]);
//!
//! assert!(matches!(
//!     vecadd(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
//!     Err(Error::LengthMismatch { left: 3, right: 2 })
//! ));
//! ```
//!
//! # Engines
//!
//! The free functions use the default engine for the enabled features.
//! [`CallBoundary`] takes any `hpc_core` execution engine and a
//! [`KernelConfig`]:
//!
//! ```rust
//! use hpc_kernels::{CallBoundary, KernelConfig};
//! use hpc_kernels::hpc_core::scalar_sequential;
//!
//! let boundary = CallBoundary::with_config(
//!     scalar_sequential(),
//!     KernelConfig::default().with_alignment(32),
//! )
//! .unwrap();
//! assert_eq!(boundary.vecdiv(&[10.0, 20.0], &[2.0, 5.0]).unwrap(), vec![5.0, 4.0]);
//! ```

pub mod boundary;
pub mod dispatch;
pub mod particle;

// Re-export workspace crates
pub use hpc_core;
pub use hpc_integrate;
pub use hpc_vector;

pub use boundary::{
    compute_pi, marshal_out, vecadd, vecdiv, vecmul, CallBoundary, HostScalar, HostSequence,
};
pub use dispatch::{invoke, invoke_json, KernelCall, KernelOutput};
pub use particle::Particle;

pub use hpc_core::{Error, KernelConfig, Result};
pub use hpc_integrate::{RiemannSum, SamplingRule};
pub use hpc_vector::{ElementwiseOp, VectorKernel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compute_pi, invoke, invoke_json, vecadd, vecdiv, vecmul, CallBoundary, ElementwiseOp,
        Error, HostSequence, KernelCall, KernelConfig, KernelOutput, Particle, Result,
        SamplingRule,
    };
}
