use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Returns `-a`, built as `a * (-1)` so it reuses the multiplication rule.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

#[cfg(test)]
mod tests {
    use super::neg_op;
    use crate::autograd::OpKind;
    use crate::value::Value;

    #[test]
    fn test_neg_is_a_product() {
        let a = Value::new(2.0);
        let b = neg_op(&a);
        assert_eq!(b.data(), -2.0);
        assert_eq!(b.op_kind(), OpKind::Mul);
        b.backward();
        assert_eq!(a.grad(), -1.0);
    }
}
