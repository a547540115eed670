//! Core traits and types for the hpc-kernels numeric kernels
//!
//! This crate provides the layers every kernel is built from.
//!
//! # Architecture Overview
//!
//! 1. **Primitives** - Type-safe SIMD loops with zero-cost dispatch
//! 2. **Execution Engines** - Unified parallelism and SIMD control
//! 3. **Workspace** - Call-scoped aligned buffers with guaranteed release
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: Kernels are monomorphised over the backend, chosen once per engine
//! - **Validate First**: Kernels reject bad input before touching a buffer
//! - **Stateless**: Nothing outlives a call; no caches, no global mutable state
//!
//! # Example
//!
//! ```rust
//! use hpc_core::{
//!     execution::{scalar_sequential, ExecutionEngine},
//!     ComputePrimitives,
//! };
//!
//! let engine = scalar_sequential();
//!
//! let a: Vec<f64> = vec![1.0, 2.0, 3.0];
//! let b: Vec<f64> = vec![4.0, 5.0, 6.0];
//! let mut c = vec![0.0f64; 3];
//! engine.primitives().add_into(&a, &b, &mut c);
//! assert_eq!(c, vec![5.0, 7.0, 9.0]);
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod kernels;
pub mod numeric;
pub mod primitives;
pub mod workspace;

// Re-export core types
pub use error::{ensure_same_length, Error, Result};

pub use execution::{
    auto_engine, scalar_sequential, simd_sequential, ExecutionEngine, ExecutionStrategy,
    SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{scalar_parallel, simd_parallel, ParallelEngine};

pub use primitives::{
    best_available_backend, best_backend_name, AutoBackend, Avx2Backend, ComputePrimitives,
    ScalarBackend,
};

pub use config::KernelConfig;
pub use kernels::NumericKernel;
pub use numeric::Numeric;
pub use workspace::{AlignedBuffer, DEFAULT_ALIGNMENT};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AlignedBuffer, ComputePrimitives, ExecutionEngine, KernelConfig, Numeric, NumericKernel,
        Result, ScalarBackend, SequentialEngine,
    };

    pub use crate::error::Error;

    // Common engine configurations
    #[cfg(feature = "parallel")]
    pub use crate::execution::{simd_parallel, ParallelEngine};
    pub use crate::execution::{scalar_sequential, simd_sequential, ExecutionStrategy};
}
