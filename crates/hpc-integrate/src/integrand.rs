//! Functions that can be integrated

/// A real function of one variable evaluated at Riemann sample points
///
/// Implementations must be pure: the parallel path evaluates sample points
/// from several threads and in no particular order.
pub trait Integrand: Sync {
    /// Value of the function at `x`
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64 + Sync,
{
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// 4 / (1 + x²), whose integral over [0, 1] is π
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PiIntegrand;

impl PiIntegrand {
    /// Lower integration bound
    pub const LOWER: f64 = 0.0;
    /// Upper integration bound
    pub const UPPER: f64 = 1.0;
}

impl Integrand for PiIntegrand {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        4.0 / (1.0 + x * x)
    }
}
