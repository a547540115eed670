//! Where inside each subinterval the integrand is sampled

use serde::{Deserialize, Serialize};

/// Sample placement for a Riemann sum
///
/// Sample i of N over [a, b] sits at `a + dh * (i + offset)` with
/// `dh = (b - a) / N`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingRule {
    /// Half a step left of the midpoint: `dh * (i - 0.5)`
    ///
    /// The first sample falls outside the interval (at `-dh / 2` on [0, 1]),
    /// which biases the result upward for decreasing integrands. This is the
    /// rule `compute_pi` uses, reproduced exactly.
    #[default]
    ShiftedMidpoint,
    /// Centre of each subinterval: `dh * (i + 0.5)`
    Midpoint,
    /// Left endpoint: `dh * i`
    Left,
    /// Right endpoint: `dh * (i + 1)`
    Right,
}

impl SamplingRule {
    /// Offset of the sample from the left edge of subinterval i, in steps
    pub const fn offset(self) -> f64 {
        match self {
            SamplingRule::ShiftedMidpoint => -0.5,
            SamplingRule::Midpoint => 0.5,
            SamplingRule::Left => 0.0,
            SamplingRule::Right => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(SamplingRule::default(), SamplingRule::ShiftedMidpoint);
        assert_eq!(SamplingRule::ShiftedMidpoint.offset(), -0.5);
        assert_eq!(SamplingRule::Midpoint.offset(), 0.5);
        assert_eq!(SamplingRule::Left.offset(), 0.0);
        assert_eq!(SamplingRule::Right.offset(), 1.0);
    }

    #[test]
    fn test_serde_names() {
        let rule: SamplingRule = serde_json::from_str("\"shifted_midpoint\"").unwrap();
        assert_eq!(rule, SamplingRule::ShiftedMidpoint);
        assert_eq!(serde_json::to_string(&SamplingRule::Right).unwrap(), "\"right\"");
    }
}
