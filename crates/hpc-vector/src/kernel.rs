//! Elementwise kernel over an execution engine

use crate::op::ElementwiseOp;
use hpc_core::{
    config::{DEFAULT_CHUNK_SIZE, DEFAULT_PARALLEL_THRESHOLD},
    ensure_same_length, ExecutionEngine, KernelConfig, Numeric, NumericKernel, Result,
};
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Applies an [`ElementwiseOp`] to pairs of equal-length sequences
///
/// Lengths are checked before any output is allocated or written. Inputs are
/// never mutated.
#[derive(Clone, Debug)]
pub struct VectorKernel<T: Numeric, E: ExecutionEngine<T>> {
    engine: E,
    parallel_threshold: usize,
    chunk_size: usize,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, E: ExecutionEngine<T>> VectorKernel<T, E> {
    /// Create a kernel running on `engine`
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            _phantom: PhantomData,
        }
    }

    /// Take the parallel threshold and chunk size from a configuration
    pub fn with_config(mut self, config: &KernelConfig) -> Self {
        self.parallel_threshold = config.parallel_threshold;
        self.chunk_size = config.chunk_size.max(1);
        self
    }

    /// Set the length at which a parallel engine starts splitting work
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set the number of elements handled by each parallel task
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Compute `op(a[i], b[i])` into a new vector
    ///
    /// Fails with `Error::LengthMismatch` when the lengths differ.
    pub fn apply(&self, op: ElementwiseOp, a: &[T], b: &[T]) -> Result<Vec<T>> {
        ensure_same_length(a.len(), b.len())?;
        let mut out = vec![T::default(); a.len()];
        self.apply_into(op, a, b, &mut out)?;
        Ok(out)
    }

    /// Compute `op(a[i], b[i])` into `out`
    ///
    /// All three slices must have the same length, else `Error::LengthMismatch`
    /// is returned and `out` is left untouched.
    #[instrument(skip(self, a, b, out), fields(op = op.name(), len = a.len()))]
    pub fn apply_into(&self, op: ElementwiseOp, a: &[T], b: &[T], out: &mut [T]) -> Result<()> {
        ensure_same_length(a.len(), b.len())?;
        ensure_same_length(a.len(), out.len())?;

        let primitives = self.engine.primitives();
        if self.should_split(a.len()) {
            debug!(
                "Splitting {} elements into chunks of {}",
                a.len(),
                self.chunk_size
            );
            self.engine
                .zip_chunks_mut(a, b, out, self.chunk_size, move |a, b, out| {
                    op.run(primitives, a, b, out)
                });
        } else {
            op.run(primitives, a, b, out);
        }
        Ok(())
    }

    /// `a[i] + b[i]`
    pub fn add(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        self.apply(ElementwiseOp::Add, a, b)
    }

    /// `a[i] * b[i]`
    pub fn multiply(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        self.apply(ElementwiseOp::Multiply, a, b)
    }

    /// `a[i] / b[i]`
    pub fn divide(&self, a: &[T], b: &[T]) -> Result<Vec<T>> {
        self.apply(ElementwiseOp::Divide, a, b)
    }

    fn should_split(&self, len: usize) -> bool {
        self.engine.is_parallel() && len >= self.parallel_threshold && len > self.chunk_size
    }
}

impl<T: Numeric, E: ExecutionEngine<T>> NumericKernel<T> for VectorKernel<T, E> {
    type Engine = E;

    fn engine(&self) -> &Self::Engine {
        &self.engine
    }

    fn name(&self) -> &'static str {
        "vector_kernel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpc_core::{scalar_sequential, Error, ScalarBackend, SequentialEngine};

    #[test]
    fn test_basic_ops() {
        let kernel = VectorKernel::new(scalar_sequential());
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(kernel.add(&a, &b).unwrap(), vec![5.0, 7.0, 9.0]);
        assert_eq!(kernel.multiply(&a, &b).unwrap(), vec![4.0, 10.0, 18.0]);
        assert_eq!(kernel.divide(&a, &b).unwrap(), vec![0.25, 0.4, 0.5]);
    }

    #[test]
    fn test_empty_inputs() {
        let kernel = VectorKernel::new(scalar_sequential());
        for op in ElementwiseOp::ALL {
            assert!(kernel.apply(op, &[], &[]).unwrap().is_empty());
        }
    }

    #[test]
    fn test_length_mismatch() {
        let kernel = VectorKernel::new(scalar_sequential());
        let err = kernel.add(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn test_out_length_mismatch_leaves_out_untouched() {
        let kernel = VectorKernel::new(scalar_sequential());
        let mut out = [7.0; 2];
        let err = kernel
            .apply_into(ElementwiseOp::Add, &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 3, right: 2 }));
        assert_eq!(out, [7.0; 2]);
    }

    #[test]
    fn test_divide_ieee() {
        let kernel = VectorKernel::new(scalar_sequential());
        let c = kernel.divide(&[1.0, -1.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(c[0], f64::INFINITY);
        assert_eq!(c[1], f64::NEG_INFINITY);
        assert!(c[2].is_nan());
    }

    #[test]
    fn test_f32_kernel() {
        let engine: SequentialEngine<f32, ScalarBackend> = SequentialEngine::new(ScalarBackend::new());
        let kernel = VectorKernel::new(engine);
        let c = kernel.multiply(&[1.5f32, 2.0], &[2.0, 0.25]).unwrap();
        assert_eq!(c, vec![3.0f32, 0.5]);
    }

    #[test]
    fn test_sequential_never_splits() {
        let kernel = VectorKernel::new(scalar_sequential())
            .with_parallel_threshold(1)
            .with_chunk_size(1);
        assert!(!kernel.should_split(1_000));
        assert_eq!(kernel.name(), "vector_kernel");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        use hpc_core::scalar_parallel;

        let a: Vec<f64> = (0..10_007).map(|i| i as f64 * 0.5).collect();
        let b: Vec<f64> = (0..10_007).map(|i| 1.0 + i as f64).collect();
        let sequential = VectorKernel::new(scalar_sequential());
        let parallel = VectorKernel::new(scalar_parallel())
            .with_config(&KernelConfig::default().with_parallel_threshold(1).with_chunk_size(256));
        assert!(parallel.should_split(a.len()));
        for op in ElementwiseOp::ALL {
            let expected = sequential.apply(op, &a, &b).unwrap();
            let actual = parallel.apply(op, &a, &b).unwrap();
            assert_eq!(expected, actual);
        }
    }
}
