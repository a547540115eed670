//! The elementwise operators

use hpc_core::{ComputePrimitives, Error, Numeric};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Binary operator applied position by position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementwiseOp {
    /// `a[i] + b[i]`
    Add,
    /// `a[i] * b[i]`
    Multiply,
    /// `a[i] / b[i]`, IEEE-754 (x / 0 is ±inf or NaN, never an error)
    Divide,
}

impl ElementwiseOp {
    /// All operators, in a fixed order
    pub const ALL: [ElementwiseOp; 3] = [
        ElementwiseOp::Add,
        ElementwiseOp::Multiply,
        ElementwiseOp::Divide,
    ];

    /// Entry-point name of the kernel exposing this operator
    pub const fn name(self) -> &'static str {
        match self {
            ElementwiseOp::Add => "vecadd",
            ElementwiseOp::Multiply => "vecmul",
            ElementwiseOp::Divide => "vecdiv",
        }
    }

    /// Apply the operator to one pair of elements
    #[inline]
    pub fn apply<T: Numeric>(self, x: T, y: T) -> T {
        match self {
            ElementwiseOp::Add => x + y,
            ElementwiseOp::Multiply => x * y,
            ElementwiseOp::Divide => x / y,
        }
    }

    /// Run the operator over equal-length slices with the given primitives
    #[inline]
    pub(crate) fn run<T, P>(self, primitives: &P, a: &[T], b: &[T], out: &mut [T])
    where
        T: Numeric,
        P: ComputePrimitives<T>,
    {
        match self {
            ElementwiseOp::Add => primitives.add_into(a, b, out),
            ElementwiseOp::Multiply => primitives.mul_into(a, b, out),
            ElementwiseOp::Divide => primitives.div_into(a, b, out),
        }
    }
}

impl fmt::Display for ElementwiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementwiseOp {
    type Err = Error;

    /// Accepts the kernel names and the plain operator names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vecadd" | "add" => Ok(ElementwiseOp::Add),
            "vecmul" | "multiply" | "mul" => Ok(ElementwiseOp::Multiply),
            "vecdiv" | "divide" | "div" => Ok(ElementwiseOp::Divide),
            other => Err(Error::invalid_argument(format!(
                "unknown elementwise operator '{other}'"
            ))),
        }
    }
}
