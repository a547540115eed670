//! π by Riemann sum of 4 / (1 + x²) over [0, 1]

use crate::{
    integrand::PiIntegrand,
    riemann::RiemannSum,
    rule::SamplingRule,
};
use hpc_core::{scalar_sequential, ExecutionEngine, KernelConfig, Result};

/// Approximate π with `partitions` shifted-midpoint samples
///
/// Sample i, for i in `0..partitions`, sits at `dh * (i - 0.5)` with
/// `dh = 1 / partitions`. Samples are accumulated sequentially in index
/// order, so the result is identical from call to call. Fails with
/// `Error::InvalidArgument` when `partitions` is zero.
///
/// ```rust
/// let pi = hpc_integrate::compute_pi(1).unwrap();
/// assert_eq!(pi, 3.2);
/// ```
pub fn compute_pi(partitions: u64) -> Result<f64> {
    compute_pi_with(scalar_sequential(), partitions, SamplingRule::ShiftedMidpoint)
}

/// Approximate π on a caller-chosen engine and sampling rule
pub fn compute_pi_with<E>(engine: E, partitions: u64, rule: SamplingRule) -> Result<f64>
where
    E: ExecutionEngine<f64>,
{
    RiemannSum::new(engine, partitions)?
        .with_rule(rule)
        .integrate(&PiIntegrand, PiIntegrand::LOWER, PiIntegrand::UPPER)
}

/// Like [`compute_pi_with`], taking thresholds from `config`
pub fn compute_pi_configured<E>(
    engine: E,
    partitions: u64,
    rule: SamplingRule,
    config: &KernelConfig,
) -> Result<f64>
where
    E: ExecutionEngine<f64>,
{
    RiemannSum::new(engine, partitions)?
        .with_rule(rule)
        .with_config(config)
        .integrate(&PiIntegrand, PiIntegrand::LOWER, PiIntegrand::UPPER)
}
