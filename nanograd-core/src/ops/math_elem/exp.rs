use crate::autograd::Op;
use crate::value::Value;

/// Returns a new node `exp(a)`.
///
/// Backward: `a.grad += out.grad * exp(a)`, with `exp(a)` recomputed from the
/// operand at backward time.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    Value::from_op(data, Op::Exp(a.clone()))
}
