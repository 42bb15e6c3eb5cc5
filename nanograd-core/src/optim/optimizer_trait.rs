use crate::error::NanogradError;
use crate::value::Value;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to every managed parameter using the gradient it
    /// has accumulated since the last [`Optimizer::zero_grad`].
    fn step(&mut self) -> Result<(), NanogradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call this before each backward pass: `backward()` accumulates.
    fn zero_grad(&mut self);

    /// The parameters managed by the optimizer.
    fn params(&self) -> &[Value];

    fn learning_rate(&self) -> f64;

    /// Changes the learning rate used by subsequent steps.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), NanogradError>;
}
