//! Full-batch training loop for a single-output [`Mlp`].

use crate::config::TrainConfig;
use crate::error::NanogradError;
use crate::nn::{mse_loss, Mlp, Module, Reduction};
use crate::optim::{Optimizer, Sgd};
use crate::value::Value;

/// Outcome of [`fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Loss before each parameter update, one entry per step.
    pub losses: Vec<f64>,
    /// Predictions of the last forward pass (before the last update).
    pub predictions: Vec<f64>,
}

impl TrainReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Trains `mlp` in place with plain SGD on the summed squared error.
///
/// Each step runs forward over every sample, builds the loss, clears the
/// parameter gradients, backpropagates and applies `p.data -= lr * p.grad`.
///
/// # Errors
/// * `InvalidConfig` if `config` does not validate.
/// * `EmptyDataset` / `DatasetMismatch` for unusable data.
/// * `DimensionMismatch` if a sample's width differs from `mlp.nin()` or the
///   network has more than one output.
/// * `NonFiniteLoss` if the loss becomes NaN or infinite; parameters are left
///   as they were before that step.
pub fn fit(
    mlp: &Mlp,
    inputs: &[Vec<f64>],
    targets: &[f64],
    config: &TrainConfig,
) -> Result<TrainReport, NanogradError> {
    config.validate()?;
    if inputs.len() != targets.len() {
        return Err(NanogradError::DatasetMismatch {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }
    if inputs.is_empty() {
        return Err(NanogradError::EmptyDataset);
    }

    let mut optimizer = Sgd::new(mlp.parameters(), config.learning_rate)?;
    let mut losses = Vec::with_capacity(config.steps);
    let mut predictions = Vec::new();

    log::info!(
        "Training {} ({} parameters) on {} samples for {} steps, lr = {}",
        mlp,
        mlp.num_parameters(),
        inputs.len(),
        config.steps,
        config.learning_rate
    );

    for step in 0..config.steps {
        // --- Forward ---
        let preds = inputs
            .iter()
            .map(|x| mlp.forward_single(&Value::leaves(x)))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = mse_loss(&preds, targets, Reduction::Sum)?;
        let loss_value = loss.data();

        if !loss_value.is_finite() {
            log::warn!("Loss is {} at step {}, stopping", loss_value, step);
            return Err(NanogradError::NonFiniteLoss {
                step,
                loss: loss_value,
            });
        }

        // --- Backward + update ---
        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        losses.push(loss_value);
        predictions = preds.iter().map(Value::data).collect();

        if step % config.log_every == 0 || step + 1 == config.steps {
            log::info!("Step = {}, loss = {:.6}", step, loss_value);
        }
    }

    Ok(TrainReport {
        losses,
        predictions,
    })
}
