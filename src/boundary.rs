//! Marshalling boundary between host collections and the native kernels
//!
//! Every call marshals its operands into freshly acquired [`AlignedBuffer`]s,
//! runs one kernel over them, and copies the result back out. The buffers are
//! owned by the call's stack frame, so they are released on every exit path,
//! early `?` returns included. Operand lengths are compared before anything
//! is acquired.

use hpc_core::{
    auto_engine, ensure_same_length, scalar_sequential, AlignedBuffer, Error, ExecutionEngine,
    KernelConfig, Result,
};
use hpc_vector::{ElementwiseOp, VectorKernel};
use serde_json::Value;
use tracing::{debug, instrument};

/// A host element that can be widened to `f64`
pub trait HostScalar {
    /// Convert the element at `index` of its sequence
    fn to_f64(&self, index: usize) -> Result<f64>;
}

impl HostScalar for f64 {
    #[inline]
    fn to_f64(&self, _index: usize) -> Result<f64> {
        Ok(*self)
    }
}

impl HostScalar for f32 {
    #[inline]
    fn to_f64(&self, _index: usize) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

impl HostScalar for i32 {
    #[inline]
    fn to_f64(&self, _index: usize) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

impl HostScalar for u32 {
    #[inline]
    fn to_f64(&self, _index: usize) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

impl HostScalar for Value {
    fn to_f64(&self, index: usize) -> Result<f64> {
        match self {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| Error::not_numeric(index, "unrepresentable number")),
            Value::Null => Err(Error::not_numeric(index, "null")),
            Value::Bool(_) => Err(Error::not_numeric(index, "boolean")),
            Value::String(_) => Err(Error::not_numeric(index, "string")),
            Value::Array(_) => Err(Error::not_numeric(index, "array")),
            Value::Object(_) => Err(Error::not_numeric(index, "object")),
        }
    }
}

/// A host-visible ordered collection of numbers
pub trait HostSequence {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the sequence has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the elements into a new native buffer aligned to `alignment` bytes
    ///
    /// The buffer is dropped, and its memory released, if any element fails
    /// to convert.
    fn marshal(&self, alignment: usize) -> Result<AlignedBuffer<f64>>;
}

impl<S: HostScalar> HostSequence for [S] {
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    fn marshal(&self, alignment: usize) -> Result<AlignedBuffer<f64>> {
        let mut buffer = AlignedBuffer::zeroed(<[S]>::len(self), alignment)?;
        for (index, (slot, element)) in buffer.as_mut_slice().iter_mut().zip(self).enumerate() {
            *slot = element.to_f64(index)?;
        }
        Ok(buffer)
    }
}

impl<S: HostScalar> HostSequence for Vec<S> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn marshal(&self, alignment: usize) -> Result<AlignedBuffer<f64>> {
        self.as_slice().marshal(alignment)
    }
}

impl<S: HostScalar, const N: usize> HostSequence for [S; N] {
    fn len(&self) -> usize {
        N
    }

    fn marshal(&self, alignment: usize) -> Result<AlignedBuffer<f64>> {
        self.as_slice().marshal(alignment)
    }
}

/// Copy a native result buffer back into a host collection
pub fn marshal_out(buffer: &AlignedBuffer<f64>) -> Vec<f64> {
    buffer.to_vec()
}

/// Entry points for one engine and configuration
///
/// Holds no per-call state; one boundary can serve concurrent calls from any
/// number of threads.
#[derive(Clone, Debug)]
pub struct CallBoundary<E: ExecutionEngine<f64>> {
    engine: E,
    config: KernelConfig,
}

impl<E: ExecutionEngine<f64>> CallBoundary<E> {
    /// Create a boundary with the default configuration
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            config: KernelConfig::default(),
        }
    }

    /// Create a boundary with a validated configuration
    pub fn with_config(engine: E, config: KernelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { engine, config })
    }

    /// The engine kernels run on
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The configuration in use
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Approximate π with `partitions` shifted-midpoint samples
    ///
    /// Always one sequential pass in index order, whatever the engine, so every
    /// boundary returns the same bits for the same `partitions`. Chunked sums
    /// are available from [`hpc_integrate::RiemannSum`] directly.
    #[instrument(skip(self))]
    pub fn compute_pi(&self, partitions: u64) -> Result<f64> {
        hpc_integrate::compute_pi(partitions)
    }

    /// `a[i] + b[i]`
    pub fn vecadd<A, B>(&self, a: &A, b: &B) -> Result<Vec<f64>>
    where
        A: HostSequence + ?Sized,
        B: HostSequence + ?Sized,
    {
        self.elementwise(ElementwiseOp::Add, a, b)
    }

    /// `a[i] * b[i]`
    pub fn vecmul<A, B>(&self, a: &A, b: &B) -> Result<Vec<f64>>
    where
        A: HostSequence + ?Sized,
        B: HostSequence + ?Sized,
    {
        self.elementwise(ElementwiseOp::Multiply, a, b)
    }

    /// `a[i] / b[i]`, IEEE-754 division
    pub fn vecdiv<A, B>(&self, a: &A, b: &B) -> Result<Vec<f64>>
    where
        A: HostSequence + ?Sized,
        B: HostSequence + ?Sized,
    {
        self.elementwise(ElementwiseOp::Divide, a, b)
    }

    /// Marshal both operands, apply `op`, and marshal the result back
    #[instrument(skip(self, a, b), fields(op = op.name(), len = a.len()))]
    pub fn elementwise<A, B>(&self, op: ElementwiseOp, a: &A, b: &B) -> Result<Vec<f64>>
    where
        A: HostSequence + ?Sized,
        B: HostSequence + ?Sized,
    {
        ensure_same_length(a.len(), b.len())?;

        let alignment = self.config.alignment;
        let lhs = a.marshal(alignment)?;
        let rhs = b.marshal(alignment)?;
        let mut out = AlignedBuffer::<f64>::zeroed(lhs.len(), alignment)?;

        VectorKernel::new(self.engine.clone())
            .with_config(&self.config)
            .apply_into(op, lhs.as_slice(), rhs.as_slice(), out.as_mut_slice())?;

        debug!("{} produced {} elements", op, out.len());
        Ok(marshal_out(&out))
    }
}

/// Approximate π with `partitions` shifted-midpoint samples
///
/// Always a single sequential pass, so the result is reproducible bit for
/// bit. Fails with `Error::InvalidArgument` when `partitions` is zero.
pub fn compute_pi(partitions: u64) -> Result<f64> {
    CallBoundary::new(scalar_sequential()).compute_pi(partitions)
}

/// `a[i] + b[i]` on the default engine
///
/// ```rust
/// assert_eq!(hpc_kernels::vecadd(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), vec![5.0, 7.0, 9.0]);
/// ```
pub fn vecadd<A, B>(a: &A, b: &B) -> Result<Vec<f64>>
where
    A: HostSequence + ?Sized,
    B: HostSequence + ?Sized,
{
    CallBoundary::new(auto_engine()).vecadd(a, b)
}

/// `a[i] * b[i]` on the default engine
pub fn vecmul<A, B>(a: &A, b: &B) -> Result<Vec<f64>>
where
    A: HostSequence + ?Sized,
    B: HostSequence + ?Sized,
{
    CallBoundary::new(auto_engine()).vecmul(a, b)
}

/// `a[i] / b[i]` on the default engine
pub fn vecdiv<A, B>(a: &A, b: &B) -> Result<Vec<f64>>
where
    A: HostSequence + ?Sized,
    B: HostSequence + ?Sized,
{
    CallBoundary::new(auto_engine()).vecdiv(a, b)
}
