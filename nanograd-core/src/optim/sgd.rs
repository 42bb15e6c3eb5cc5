use crate::error::NanogradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;

/// Implements plain Stochastic Gradient Descent (SGD).
///
/// Each step applies `p.data -= lr * p.grad` to every managed parameter.
/// Parameters whose gradient is NaN or infinite are left untouched.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
}

fn check_learning_rate(lr: f64) -> Result<(), NanogradError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(())
    } else {
        Err(NanogradError::InvalidArgument {
            operation: "Sgd".to_string(),
            reason: format!("invalid learning rate: {}", lr),
        })
    }
}

impl Sgd {
    /// Creates an SGD optimizer over `params`.
    ///
    /// # Errors
    /// `InvalidArgument` if `lr` is not a finite positive number.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self, NanogradError> {
        check_learning_rate(lr)?;
        Ok(Sgd {
            params: params.into_iter().collect(),
            lr,
        })
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), NanogradError> {
        let mut skipped = 0usize;

        for param in &self.params {
            let grad = param.grad();
            if !grad.is_finite() {
                skipped += 1;
                continue;
            }
            param.adjust_data(-self.lr * grad);
        }

        if skipped > 0 {
            log::warn!(
                "SGD step skipped {} of {} parameters with non-finite gradients",
                skipped,
                self.params.len()
            );
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn params(&self) -> &[Value] {
        &self.params
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), NanogradError> {
        check_learning_rate(lr)?;
        self.lr = lr;
        Ok(())
    }
}
