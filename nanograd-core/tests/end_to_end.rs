use approx::assert_abs_diff_eq;
use nanograd_core::utils::testing::check_grads_near;
use nanograd_core::Value;

mod common;
use common::init_logger;

fn neuron_inputs() -> [Value; 5] {
    [
        Value::with_label(2.0, "x1"),
        Value::with_label(0.0, "x2"),
        Value::with_label(-3.0, "w1"),
        Value::with_label(1.0, "w2"),
        Value::with_label(6.8813735870195432, "b"),
    ]
}

fn raw_activation(v: &[Value; 5]) -> Value {
    let [x1, x2, w1, w2, b] = v;
    let x1w1 = x1 * w1;
    let x2w2 = x2 * w2;
    &(&x1w1 + &x2w2) + b
}

#[test]
fn test_neuron_with_tanh_primitive() {
    init_logger();
    let v = neuron_inputs();
    let o = raw_activation(&v).tanh();
    o.set_label("o");

    assert_abs_diff_eq!(o.data(), 0.7071067811865476, epsilon = 1e-6);
    o.backward();
    check_grads_near(&v, &[-1.5, 0.5, 1.0, 0.0, 0.5], 1e-6);
}

#[test]
fn test_neuron_with_composed_tanh() {
    init_logger();
    let v = neuron_inputs();
    let n = raw_activation(&v);
    let e = (2.0 * &n).exp();
    let o = (&e - 1.0) / (&e + 1.0);

    assert_abs_diff_eq!(o.data(), 0.7071067811865476, epsilon = 1e-6);
    o.backward();
    check_grads_near(&v, &[-1.5, 0.5, 1.0, 0.0, 0.5], 1e-6);
}

#[test]
fn test_labels_show_in_debug() {
    let v = neuron_inputs();
    assert_eq!(v[0].label().as_deref(), Some("x1"));
    assert!(format!("{:?}", v[4]).contains('b'));
}
