// nanograd-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::value::Value;

/// Returns a new node `a + b`.
///
/// Backward: d(a + b)/da = d(a + b)/db = 1, so both operands receive the
/// output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(data, Op::Add(a.clone(), b.clone()))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
