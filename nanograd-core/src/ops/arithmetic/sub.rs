use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Returns `a - b`, built as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}
