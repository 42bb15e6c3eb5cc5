use super::mul_op;
use crate::value::Value;

#[test]
fn test_mul_forward_backward() {
    let a = Value::new(3.0);
    let b = Value::new(4.0);
    let c = mul_op(&a, &b);
    assert_eq!(c.data(), 12.0);
    c.backward();
    // dc/da = b, dc/db = a
    assert_eq!(a.grad(), 4.0);
    assert_eq!(b.grad(), 3.0);
}

#[test]
fn test_square_chain_rule() {
    let x = Value::new(3.0);
    let y = mul_op(&x, &x);
    y.backward();
    assert_eq!(y.data(), 9.0);
    assert_eq!(x.grad(), 6.0);
}

#[test]
fn test_mul_by_zero_operand() {
    let a = Value::new(0.0);
    let b = Value::new(5.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_eq!(a.grad(), 5.0);
    assert_eq!(b.grad(), 0.0);
}
