// nanograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::value::Value;

/// Returns a new node `a * b`.
///
/// Backward (product rule): `a.grad += out.grad * b`, `b.grad += out.grad * a`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(data, Op::Mul(a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
