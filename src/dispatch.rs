//! Kernel calls described as data
//!
//! A [`KernelCall`] names one kernel and carries its arguments; invoking it
//! through a [`CallBoundary`] yields a [`KernelOutput`]. Both sides have a
//! JSON form so an orchestrator can submit work and read back the captured
//! return value without linking against the kernel types.
//!
//! ```json
//! {"kernel": "compute_pi", "partitions": 10}
//! {"kernel": "vecadd", "a": [1, 2, 3], "b": [4, 5, 6]}
//! ```
//!
//! JSON has no representation for ±inf or NaN: such results serialise as
//! `null`, and `null` operands are rejected with `Error::InvalidInput`.

use crate::boundary::{self, CallBoundary};
use hpc_core::{auto_engine, ExecutionEngine, Result};
use hpc_vector::ElementwiseOp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// One unit of kernel work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kernel", rename_all = "snake_case")]
pub enum KernelCall {
    /// π by Riemann sum
    ComputePi {
        /// Number of subintervals
        partitions: u64,
    },
    /// Elementwise sum
    Vecadd {
        /// Left operand
        a: Vec<Value>,
        /// Right operand
        b: Vec<Value>,
    },
    /// Elementwise product
    Vecmul {
        /// Left operand
        a: Vec<Value>,
        /// Right operand
        b: Vec<Value>,
    },
    /// Elementwise quotient
    Vecdiv {
        /// Left operand
        a: Vec<Value>,
        /// Right operand
        b: Vec<Value>,
    },
}

impl KernelCall {
    /// Build an elementwise call from native operands
    pub fn elementwise(op: ElementwiseOp, a: &[f64], b: &[f64]) -> Self {
        let a = a.iter().copied().map(Value::from).collect();
        let b = b.iter().copied().map(Value::from).collect();
        match op {
            ElementwiseOp::Add => KernelCall::Vecadd { a, b },
            ElementwiseOp::Multiply => KernelCall::Vecmul { a, b },
            ElementwiseOp::Divide => KernelCall::Vecdiv { a, b },
        }
    }

    /// Name of the kernel this call targets
    pub fn name(&self) -> &'static str {
        match self {
            KernelCall::ComputePi { .. } => "compute_pi",
            KernelCall::Vecadd { .. } => ElementwiseOp::Add.name(),
            KernelCall::Vecmul { .. } => ElementwiseOp::Multiply.name(),
            KernelCall::Vecdiv { .. } => ElementwiseOp::Divide.name(),
        }
    }

    /// The elementwise operator, for vector calls
    pub fn op(&self) -> Option<ElementwiseOp> {
        match self {
            KernelCall::ComputePi { .. } => None,
            KernelCall::Vecadd { .. } => Some(ElementwiseOp::Add),
            KernelCall::Vecmul { .. } => Some(ElementwiseOp::Multiply),
            KernelCall::Vecdiv { .. } => Some(ElementwiseOp::Divide),
        }
    }
}

/// Captured return value of a kernel call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KernelOutput {
    /// Result of `compute_pi`
    Scalar(f64),
    /// Result of an elementwise kernel
    Sequence(Vec<f64>),
}

impl KernelOutput {
    /// The scalar value, if this is a scalar result
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            KernelOutput::Scalar(value) => Some(*value),
            KernelOutput::Sequence(_) => None,
        }
    }

    /// The sequence, if this is a sequence result
    pub fn as_sequence(&self) -> Option<&[f64]> {
        match self {
            KernelOutput::Scalar(_) => None,
            KernelOutput::Sequence(values) => Some(values),
        }
    }
}

impl<E: ExecutionEngine<f64>> CallBoundary<E> {
    /// Run one call through this boundary
    #[instrument(skip(self, call), fields(kernel = call.name()))]
    pub fn invoke(&self, call: &KernelCall) -> Result<KernelOutput> {
        let output = match call {
            KernelCall::ComputePi { partitions } => {
                KernelOutput::Scalar(self.compute_pi(*partitions)?)
            }
            KernelCall::Vecadd { a, b } => KernelOutput::Sequence(self.vecadd(a, b)?),
            KernelCall::Vecmul { a, b } => KernelOutput::Sequence(self.vecmul(a, b)?),
            KernelCall::Vecdiv { a, b } => KernelOutput::Sequence(self.vecdiv(a, b)?),
        };
        debug!("{} completed", call.name());
        Ok(output)
    }

    /// Parse a JSON call, run it, and serialise the output
    ///
    /// Malformed JSON fails with `Error::Serialization`.
    pub fn invoke_json(&self, json: &str) -> Result<String> {
        let call: KernelCall = serde_json::from_str(json)?;
        let output = self.invoke(&call)?;
        Ok(serde_json::to_string(&output)?)
    }
}

/// Run one call on the default engine
///
/// `compute_pi` takes the same sequential path as [`boundary::compute_pi`].
pub fn invoke(call: &KernelCall) -> Result<KernelOutput> {
    match call {
        KernelCall::ComputePi { partitions } => {
            Ok(KernelOutput::Scalar(boundary::compute_pi(*partitions)?))
        }
        _ => CallBoundary::new(auto_engine()).invoke(call),
    }
}

/// Parse a JSON call, run it on the default engine, and serialise the output
pub fn invoke_json(json: &str) -> Result<String> {
    let call: KernelCall = serde_json::from_str(json)?;
    let output = invoke(&call)?;
    Ok(serde_json::to_string(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpc_core::Error;
    use serde_json::json;

    #[test]
    fn test_call_wire_format() {
        let call: KernelCall =
            serde_json::from_value(json!({"kernel": "compute_pi", "partitions": 10})).unwrap();
        assert_eq!(call, KernelCall::ComputePi { partitions: 10 });
        assert_eq!(call.name(), "compute_pi");
        assert!(call.op().is_none());

        let call = KernelCall::elementwise(ElementwiseOp::Multiply, &[2.0], &[4.0]);
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value, json!({"kernel": "vecmul", "a": [2.0], "b": [4.0]}));
        assert_eq!(call.op(), Some(ElementwiseOp::Multiply));
    }

    #[test]
    fn test_output_untagged() {
        assert_eq!(
            serde_json::to_string(&KernelOutput::Scalar(3.2)).unwrap(),
            "3.2"
        );
        assert_eq!(
            serde_json::to_string(&KernelOutput::Sequence(vec![1.0, f64::INFINITY])).unwrap(),
            "[1.0,null]"
        );
        let output: KernelOutput = serde_json::from_str("[5.0,4.0]").unwrap();
        assert_eq!(output.as_sequence(), Some(&[5.0, 4.0][..]));
        assert_eq!(KernelOutput::Scalar(1.0).as_scalar(), Some(1.0));
    }

    #[test]
    fn test_invoke() {
        let output = invoke(&KernelCall::ComputePi { partitions: 1 }).unwrap();
        assert_eq!(output, KernelOutput::Scalar(3.2));

        let call = KernelCall::elementwise(ElementwiseOp::Divide, &[10.0, 20.0], &[2.0, 5.0]);
        assert_eq!(invoke(&call).unwrap(), KernelOutput::Sequence(vec![5.0, 4.0]));
    }

    #[test]
    fn test_invoke_json_errors() {
        assert!(matches!(invoke_json("{\"kernel\":"), Err(Error::Serialization(_))));
        assert!(matches!(
            invoke_json(r#"{"kernel": "vecpow", "a": [], "b": []}"#),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            invoke_json(r#"{"kernel": "compute_pi", "partitions": 0}"#),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            invoke_json(r#"{"kernel": "vecadd", "a": [1, 2, 3], "b": [1, 2]}"#),
            Err(Error::LengthMismatch { left: 3, right: 2 })
        ));
        assert!(matches!(
            invoke_json(r#"{"kernel": "vecadd", "a": [1, null], "b": [1, 2]}"#),
            Err(Error::InvalidInput(_))
        ));
    }
}
