use crate::error::NanogradError;
use crate::value::Value;

/// The base trait for all neural network building blocks (neurons, layers, MLPs).
///
/// A module maps a slice of input nodes to a vector of output nodes and owns a
/// set of learnable parameters, each of which is a leaf [`Value`].
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, building the graph from `inputs` to the outputs.
    ///
    /// # Errors
    /// Returns `NanogradError::DimensionMismatch` if `inputs.len()` does not
    /// match the module's fan-in.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NanogradError>;

    /// Returns handles to every learnable parameter, including those of
    /// sub-modules, in a stable order.
    ///
    /// The handles share their nodes with the module: updating one updates the
    /// module.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    /// Total number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Convenience wrapper: wraps plain numbers as fresh leaves and runs
    /// [`Module::forward`].
    fn forward_data(&self, inputs: &[f64]) -> Result<Vec<Value>, NanogradError> {
        self.forward(&Value::leaves(inputs))
    }
}
