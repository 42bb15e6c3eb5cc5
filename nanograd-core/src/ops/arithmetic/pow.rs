// nanograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::NanogradError;
use crate::ops::operand::Operand;
use crate::value::Value;

/// Returns a new node `a ** exponent` for a plain numeric exponent.
///
/// Backward: `a.grad += out.grad * exponent * a ** (exponent - 1)`.
///
/// Domain errors are not masked: a negative base with a fractional exponent
/// gives NaN, and a zero base with `exponent - 1 < 0` gives inf in the
/// backward pass.
pub fn pow_op(a: &Value, exponent: f64) -> Value {
    let data = a.data().powf(exponent);
    Value::from_op(data, Op::Pow(a.clone(), exponent))
}

/// Like [`pow_op`], but accepts any [`Operand`] and rejects graph-valued
/// exponents up front.
///
/// # Errors
/// Returns `NanogradError::InvalidArgument` if `exponent` is a node: only
/// constant exponents are differentiable here.
pub fn try_pow_op(a: &Value, exponent: Operand) -> Result<Value, NanogradError> {
    match exponent {
        Operand::Scalar(p) => Ok(pow_op(a, p)),
        Operand::Node(_) => Err(NanogradError::InvalidArgument {
            operation: "pow".to_string(),
            reason: "exponent must be a plain number, not a graph node".to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
