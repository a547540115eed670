//! Riemann-sum integration over an execution engine
//!
//! The interval [a, b] is split into N equal subintervals of width
//! `dh = (b - a) / N`; the integrand is sampled once per subinterval at the
//! point chosen by the [`SamplingRule`] and the samples are summed and scaled
//! by `dh`.
//!
//! With a sequential engine (or N below the parallel threshold) the samples
//! are accumulated in index order in a single pass, so results are
//! reproducible bit for bit. A parallel engine splits the index range into
//! contiguous chunks, accumulates each chunk in order, then reduces the chunk
//! partials with the engine's `sum` primitive.

use crate::{integrand::Integrand, rule::SamplingRule};
use hpc_core::{
    config::{DEFAULT_CHUNK_SIZE, DEFAULT_PARALLEL_THRESHOLD},
    ComputePrimitives, Error, ExecutionEngine, KernelConfig, NumericKernel, Result,
};
use tracing::{debug, instrument};

/// Riemann-sum integrator with a fixed partition count
#[derive(Clone, Debug)]
pub struct RiemannSum<E> {
    engine: E,
    partitions: u64,
    rule: SamplingRule,
    parallel_threshold: usize,
    chunk_size: usize,
}

impl<E: ExecutionEngine<f64>> RiemannSum<E> {
    /// Create an integrator using `partitions` subintervals
    ///
    /// Fails with [`Error::InvalidArgument`] when `partitions` is zero.
    pub fn new(engine: E, partitions: u64) -> Result<Self> {
        if partitions == 0 {
            return Err(Error::invalid_argument(
                "number of partitions must be at least 1",
            ));
        }
        Ok(Self {
            engine,
            partitions,
            rule: SamplingRule::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
        })
    }

    /// Set the sampling rule
    pub fn with_rule(mut self, rule: SamplingRule) -> Self {
        self.rule = rule;
        self
    }

    /// Take the parallel threshold and chunk size from a configuration
    pub fn with_config(mut self, config: &KernelConfig) -> Self {
        self.parallel_threshold = config.parallel_threshold;
        self.chunk_size = config.chunk_size.max(1);
        self
    }

    /// Set the partition count at which a parallel engine starts splitting work
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set the number of partitions handled by each parallel task
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Number of subintervals
    pub fn partitions(&self) -> u64 {
        self.partitions
    }

    /// Sampling rule in use
    pub fn rule(&self) -> SamplingRule {
        self.rule
    }

    /// Approximate the integral of `integrand` from `lower` to `upper`
    ///
    /// `lower > upper` is accepted and yields the negated integral over
    /// [upper, lower]. Non-finite bounds fail with [`Error::InvalidArgument`].
    #[instrument(skip(self, integrand), fields(partitions = self.partitions, rule = ?self.rule))]
    pub fn integrate<F>(&self, integrand: &F, lower: f64, upper: f64) -> Result<f64>
    where
        F: Integrand + ?Sized,
    {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::invalid_argument(format!(
                "integration bounds must be finite, got [{lower}, {upper}]"
            )));
        }

        let dh = (upper - lower) / self.partitions as f64;
        let offset = self.rule.offset();

        let area = if self.should_split() {
            self.accumulate_parallel(integrand, lower, dh, offset)?
        } else {
            accumulate(integrand, lower, dh, offset, 0, self.partitions)
        };

        Ok(area * dh)
    }

    fn should_split(&self) -> bool {
        self.engine.is_parallel()
            && self.partitions >= self.parallel_threshold as u64
            && self.partitions > self.chunk_size as u64
    }

    fn accumulate_parallel<F>(&self, integrand: &F, lower: f64, dh: f64, offset: f64) -> Result<f64>
    where
        F: Integrand + ?Sized,
    {
        let chunk = self.chunk_size as u64;
        let n_chunks = usize::try_from(self.partitions.div_ceil(chunk)).map_err(|_| {
            Error::invalid_argument(format!(
                "{} partitions cannot be split into addressable chunks",
                self.partitions
            ))
        })?;
        let partitions = self.partitions;

        debug!(
            "Splitting {} partitions into {} chunks across {} threads",
            partitions,
            n_chunks,
            self.engine.num_threads()
        );

        let partials = self.engine.execute_batch(n_chunks, |c| {
            let start = c as u64 * chunk;
            let end = (start + chunk).min(partitions);
            accumulate(integrand, lower, dh, offset, start, end)
        });

        Ok(self.engine.primitives().sum(&partials))
    }
}

impl<E: ExecutionEngine<f64>> NumericKernel<f64> for RiemannSum<E> {
    type Engine = E;

    fn engine(&self) -> &Self::Engine {
        &self.engine
    }

    fn name(&self) -> &'static str {
        "riemann_sum"
    }
}

/// Sum of the samples for subintervals `start..end`, in index order
#[inline]
fn accumulate<F>(integrand: &F, lower: f64, dh: f64, offset: f64, start: u64, end: u64) -> f64
where
    F: Integrand + ?Sized,
{
    let mut area = 0.0;
    for i in start..end {
        let x = lower + dh * (i as f64 + offset);
        area += integrand.evaluate(x);
    }
    area
}
