use super::relu_op;
use crate::autograd::OpKind;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

#[test]
fn test_relu_forward() {
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (&x, &e) in inputs.iter().zip(expected.iter()) {
        let y = relu_op(&Value::new(x));
        assert_eq!(y.data(), e);
        assert_eq!(y.op_kind(), OpKind::Relu);
    }
}

#[test]
fn test_relu_negative_blocks_gradient() {
    let x = Value::new(-2.0);
    let y = relu_op(&x);
    y.backward();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_relu_zero_blocks_gradient() {
    let x = Value::new(0.0);
    let y = relu_op(&x);
    y.backward();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_relu_positive_passes_upstream_exactly() {
    // loss = relu(x) * 3 => upstream into relu is 3
    let x = Value::new(1.25);
    let y = relu_op(&x);
    let loss = mul_op(&y, &Value::new(3.0));
    loss.backward();
    assert_eq!(y.grad(), 3.0);
    assert_eq!(x.grad(), 3.0);
}
