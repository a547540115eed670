//! Kernel trait shared by the integration and vector arithmetic crates
//!
//! A kernel owns an execution engine and nothing else: it holds no buffers
//! and no per-call state, so one instance can serve any number of calls,
//! concurrently, from any thread.

use crate::{execution::ExecutionEngine, Numeric};

/// Base trait for all numeric kernels
pub trait NumericKernel<T: Numeric = f64>: Clone + Send + Sync {
    /// The engine this kernel dispatches through
    type Engine: ExecutionEngine<T>;

    /// Get the engine used by this kernel
    fn engine(&self) -> &Self::Engine;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
