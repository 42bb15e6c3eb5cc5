use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Returns `a / b`, built as `a * b ** -1`.
///
/// Division by a node holding 0 yields ±inf/NaN; nothing is checked.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
