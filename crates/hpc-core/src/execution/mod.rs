//! Execution engines
//!
//! An engine pairs a set of compute primitives (scalar or SIMD) with a
//! scheduling strategy (calling thread or rayon pool). Kernels are generic
//! over the engine, so both choices are made once, at the type level, and a
//! kernel never spawns threads itself.

use crate::numeric::Numeric;
use crate::primitives::{AutoBackend, ComputePrimitives, ScalarBackend};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

#[cfg(feature = "parallel")]
use crate::{config::KernelConfig, Error, Result};
#[cfg(feature = "parallel")]
use std::sync::Arc;

/// How an engine schedules work
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// Everything runs on the calling thread
    Sequential,
    /// Independent tasks run on a rayon pool
    Parallel,
}

/// Scheduling and primitive selection for a kernel
pub trait ExecutionEngine<T: Numeric>: Clone + Send + Sync {
    /// Inner loops used by this engine
    type Primitives: ComputePrimitives<T>;

    /// Access the inner loops
    fn primitives(&self) -> &Self::Primitives;

    /// Run `f(0)..f(count)` and collect the results in index order
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Walk `a`, `b` and `out` in lockstep chunks of `chunk_size` elements
    ///
    /// The three slices must have the same length; chunks never overlap, so
    /// each invocation of `f` owns its slice of `out` exclusively.
    fn zip_chunks_mut<F>(&self, a: &[T], b: &[T], out: &mut [T], chunk_size: usize, f: F)
    where
        F: Fn(&[T], &[T], &mut [T]) + Sync + Send;

    /// Scheduling strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Whether work handed to this engine may be split across threads
    fn is_parallel(&self) -> bool {
        !matches!(self.strategy(), ExecutionStrategy::Sequential)
    }

    /// Worker threads available to this engine
    fn num_threads(&self) -> usize;
}

/// Runs everything on the calling thread
#[derive(Clone, Debug)]
pub struct SequentialEngine<T: Numeric, P: ComputePrimitives<T>> {
    primitives: P,
    _phantom: PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> SequentialEngine<T, P> {
    /// Wrap `primitives` in a sequential engine
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: PhantomData,
        }
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> ExecutionEngine<T> for SequentialEngine<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &P {
        &self.primitives
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn zip_chunks_mut<F>(&self, a: &[T], b: &[T], out: &mut [T], chunk_size: usize, f: F)
    where
        F: Fn(&[T], &[T], &mut [T]) + Sync + Send,
    {
        let step = chunk_size.max(1);
        let lhs = a.chunks(step);
        let rhs = b.chunks(step);
        for ((x, y), o) in lhs.zip(rhs).zip(out.chunks_mut(step)) {
            f(x, y, o);
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Splits work across a rayon pool
///
/// Uses the global pool unless built with a dedicated one.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug)]
pub struct ParallelEngine<T: Numeric, P: ComputePrimitives<T>> {
    primitives: P,
    pool: Option<Arc<rayon::ThreadPool>>,
    _phantom: PhantomData<T>,
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ParallelEngine<T, P> {
    /// Engine on the global rayon pool
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            pool: None,
            _phantom: PhantomData,
        }
    }

    /// Engine on an existing pool, which may be shared with other engines
    pub fn with_thread_pool(primitives: P, pool: Arc<rayon::ThreadPool>) -> Self {
        Self {
            primitives,
            pool: Some(pool),
            _phantom: PhantomData,
        }
    }

    /// Engine on a new dedicated pool of `num_threads` workers
    pub fn with_num_threads(primitives: P, num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(Error::invalid_argument("thread pool needs at least 1 thread"));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("hpc-kernels-{i}"))
            .build()
            .map_err(|e| Error::Execution(format!("could not build thread pool: {e}")))?;

        log::debug!("built dedicated pool of {num_threads} threads");
        Ok(Self::with_thread_pool(primitives, Arc::new(pool)))
    }

    /// Engine sized by `config.threads`; the global pool when unset
    pub fn from_config(primitives: P, config: &KernelConfig) -> Result<Self> {
        config.validate()?;
        match config.threads {
            Some(threads) => Self::with_num_threads(primitives, threads),
            None => Ok(Self::new(primitives)),
        }
    }

    fn in_pool<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ExecutionEngine<T> for ParallelEngine<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &P {
        &self.primitives
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        self.in_pool(|| (0..count).into_par_iter().map(f).collect())
    }

    fn zip_chunks_mut<F>(&self, a: &[T], b: &[T], out: &mut [T], chunk_size: usize, f: F)
    where
        F: Fn(&[T], &[T], &mut [T]) + Sync + Send,
    {
        use rayon::prelude::*;

        let step = chunk_size.max(1);
        self.in_pool(move || {
            a.par_chunks(step)
                .zip(b.par_chunks(step))
                .zip(out.par_chunks_mut(step))
                .for_each(|((x, y), o)| f(x, y, o));
        })
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

/// Scalar loops on the calling thread
pub fn scalar_sequential() -> SequentialEngine<f64, ScalarBackend> {
    SequentialEngine::new(ScalarBackend)
}

/// AVX2 loops on the calling thread when the CPU has them, scalar otherwise
pub fn simd_sequential() -> SequentialEngine<f64, AutoBackend> {
    SequentialEngine::new(AutoBackend::detect())
}

/// Scalar loops on the global rayon pool
#[cfg(feature = "parallel")]
pub fn scalar_parallel() -> ParallelEngine<f64, ScalarBackend> {
    ParallelEngine::new(ScalarBackend)
}

/// AVX2 loops on the global rayon pool when the CPU has them, scalar otherwise
#[cfg(feature = "parallel")]
pub fn simd_parallel() -> ParallelEngine<f64, AutoBackend> {
    ParallelEngine::new(AutoBackend::detect())
}

/// The fastest engine the enabled features and the running CPU allow
///
/// Never panics: without AVX2 at runtime the engine runs the scalar loops.
pub fn auto_engine() -> impl ExecutionEngine<f64> {
    #[cfg(feature = "parallel")]
    {
        simd_parallel()
    }
    #[cfg(not(feature = "parallel"))]
    {
        simd_sequential()
    }
}
