use crate::error::NanogradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NanogradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {output_plus:?}, f(x-eps): {output_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        output_plus: f64,
        output_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Invalid gradient check setting: {0}")]
    InvalidSetting(String),
}

impl From<NanogradError> for GradCheckError {
    fn from(err: NanogradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar output from one leaf per entry of `inputs`. The
/// analytical gradient of each leaf (from `backward()`) is compared with
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`; a pair agrees if it is within
/// `tolerance` in absolute or in relative terms.
///
/// `func` is called `1 + 2 * inputs.len()` times, each time on fresh leaves.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, NanogradError>,
{
    if !(epsilon > 0.0) || !(tolerance > 0.0) {
        return Err(GradCheckError::InvalidSetting(format!(
            "epsilon ({}) and tolerance ({}) must be positive",
            epsilon, tolerance
        )));
    }

    // --- 1. Analytical gradients ---
    let leaves = Value::leaves(inputs);
    let output = func(&leaves)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- 2. Numerical gradients, one input at a time ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let output_plus = evaluate_perturbed(&func, inputs, i, epsilon)?;
        let output_minus = evaluate_perturbed(&func, inputs, i, -epsilon)?;
        let numerical_grad = (output_plus - output_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                output_plus,
                output_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, NanogradError>,
{
    let mut perturbed = inputs.to_vec();
    perturbed[index] += delta;
    let output = func(&Value::leaves(&perturbed))?;
    Ok(output.data())
}
