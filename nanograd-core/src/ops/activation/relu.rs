// nanograd-core/src/ops/activation/relu.rs

use crate::autograd::Op;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// Backward: the output gradient flows through only when the output is
/// strictly positive. At exactly 0 the subgradient is taken to be 0.
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let data = if x < 0.0 { 0.0 } else { x };
    Value::from_op(data, Op::Relu(a.clone()))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
