// nanograd-core/src/ops/math_elem/tanh.rs

use crate::autograd::Op;
use crate::value::Value;

/// Returns a new node `tanh(a)`, computed as `(e^2x - 1) / (e^2x + 1)`.
///
/// Backward: `a.grad += out.grad * (1 - t^2)` where `t` is this node's value.
///
/// For `|x|` beyond roughly 355, `e^2x` overflows and the result is NaN; this is
/// not clamped.
pub fn tanh_op(a: &Value) -> Value {
    let e2x = (2.0 * a.data()).exp();
    let t = (e2x - 1.0) / (e2x + 1.0);
    Value::from_op(t, Op::Tanh(a.clone()))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
