// nanograd-core/src/nn/losses/mse.rs

use crate::error::NanogradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = NanogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(NanogradError::InvalidArgument {
                operation: "Reduction::from_str".to_string(),
                reason: format!("unsupported reduction type: {}", s),
            }),
        }
    }
}

/// Squared-error loss between prediction nodes and plain-number targets.
///
/// Builds `sum_i (pred_i - target_i) ** 2` in the graph (divided by the count
/// for `Reduction::Mean`), so calling `backward()` on the result pushes
/// gradients into every prediction and, through them, into the parameters.
///
/// # Errors
/// `EmptyDataset` if there are no predictions, `DatasetMismatch` if the two
/// slices have different lengths.
pub fn mse_loss(
    predictions: &[Value],
    targets: &[f64],
    reduction: Reduction,
) -> Result<Value, NanogradError> {
    if predictions.len() != targets.len() {
        return Err(NanogradError::DatasetMismatch {
            inputs: predictions.len(),
            targets: targets.len(),
        });
    }
    if predictions.is_empty() {
        return Err(NanogradError::EmptyDataset);
    }

    let total: Value = predictions
        .iter()
        .zip(targets)
        .map(|(pred, &target)| pred.sub(target).pow(2.0))
        .sum();

    Ok(match reduction {
        Reduction::Sum => total,
        Reduction::Mean => total.div(predictions.len() as f64),
    })
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
