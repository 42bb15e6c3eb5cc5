use crate::value::Value;

/// Checks that `values[i].data()` is within `tolerance` of `expected[i]`.
/// Panics with the offending index otherwise.
pub fn check_data_near(values: &[Value], expected: &[f64], tolerance: f64) {
    check_near("data", values, expected, tolerance, Value::data);
}

/// Checks that `values[i].grad()` is within `tolerance` of `expected[i]`.
/// Panics with the offending index otherwise.
pub fn check_grads_near(values: &[Value], expected: &[f64], tolerance: f64) {
    check_near("grad", values, expected, tolerance, Value::grad);
}

fn check_near(
    what: &str,
    values: &[Value],
    expected: &[f64],
    tolerance: f64,
    read: fn(&Value) -> f64,
) {
    assert_eq!(values.len(), expected.len(), "Length mismatch");

    for (i, (v, e)) in values.iter().zip(expected.iter()).enumerate() {
        let actual = read(v);
        let diff = (actual - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, actual, e, diff, tolerance
            );
        }
    }
}
