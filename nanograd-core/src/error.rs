use thiserror::Error;

/// Custom error type for the nanograd crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NanogradError {
    #[error("Invalid argument for {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Dataset mismatch: {inputs} input samples but {targets} targets")]
    DatasetMismatch { inputs: usize, targets: usize },

    #[error("Cannot train on an empty dataset")]
    EmptyDataset,

    #[error("Invalid configuration for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("Loss became non-finite ({loss}) at step {step}")]
    NonFiniteLoss { step: usize, loss: f64 },
}
