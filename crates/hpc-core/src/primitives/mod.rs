//! Computational primitives with compile-time dispatch
//!
//! This module provides the low-level loops behind the kernels, with a
//! portable scalar backend and an AVX2 backend for x86_64.
//!
//! # Architecture
//!
//! - Single unified `ComputePrimitives<T>` trait for all operations
//! - Concrete backend types: `ScalarBackend`, `Avx2Backend`
//! - `AutoBackend` picks between them once, at runtime
//! - Zero-cost abstractions - no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use hpc_core::{ComputePrimitives, ScalarBackend};
//!
//! let backend = ScalarBackend::new();
//! let a: [f64; 3] = [1.0, 2.0, 3.0];
//! let b: [f64; 3] = [4.0, 5.0, 6.0];
//! let mut out = [0.0f64; 3];
//! ComputePrimitives::<f64>::add_into(&backend, &a, &b, &mut out);
//! assert_eq!(out, [5.0, 7.0, 9.0]);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{best_available_backend, AutoBackend, Avx2Backend, ScalarBackend};
pub use traits::ComputePrimitives;

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    if Avx2Backend::is_available() {
        "avx2"
    } else {
        "scalar"
    }
}
