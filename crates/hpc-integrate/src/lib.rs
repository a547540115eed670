//! Riemann-sum integration kernels
//!
//! [`RiemannSum`] integrates any [`Integrand`] over a finite interval using
//! one of several [`SamplingRule`]s, on any `hpc_core` execution engine.
//! [`compute_pi`] is the fixed configuration that approximates π from
//! 4 / (1 + x²) over [0, 1].
//!
//! # Example
//!
//! ```rust
//! use hpc_core::scalar_sequential;
//! use hpc_integrate::{RiemannSum, SamplingRule};
//!
//! let riemann = RiemannSum::new(scalar_sequential(), 4)
//!     .unwrap()
//!     .with_rule(SamplingRule::Midpoint);
//! let area = riemann.integrate(&|x: f64| x * x, 0.0, 2.0).unwrap();
//! assert!((area - 2.625).abs() < 1e-12);
//! ```

pub mod integrand;
pub mod pi;
pub mod riemann;
pub mod rule;

pub use integrand::{Integrand, PiIntegrand};
pub use pi::{compute_pi, compute_pi_configured, compute_pi_with};
pub use riemann::RiemannSum;
pub use rule::SamplingRule;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{compute_pi, Integrand, PiIntegrand, RiemannSum, SamplingRule};
}
