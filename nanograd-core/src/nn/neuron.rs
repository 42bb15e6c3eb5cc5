use crate::error::NanogradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Nonlinearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    /// No nonlinearity; the neuron outputs its raw weighted sum.
    Linear,
}

impl Activation {
    pub fn apply(&self, act: &Value) -> Value {
        match self {
            Activation::Tanh => act.tanh(),
            Activation::Relu => act.relu(),
            Activation::Linear => act.clone(),
        }
    }
}

/// A single neuron: `activation(b + sum_i(x_i * w_i))`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights, drawing weights and bias from `init`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NanogradError> {
        if nin == 0 {
            return Err(NanogradError::InvalidArgument {
                operation: "Neuron::new".to_string(),
                reason: "a neuron needs at least one input".to_string(),
            });
        }
        let weights = Value::leaves(&init.sample_n(nin, rng)?);
        let bias = Value::new(init.sample(rng)?);
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Creates a neuron from explicit parameter values.
    pub fn from_parameters(
        weights: &[f64],
        bias: f64,
        activation: Activation,
    ) -> Result<Self, NanogradError> {
        if weights.is_empty() {
            return Err(NanogradError::InvalidArgument {
                operation: "Neuron::from_parameters".to_string(),
                reason: "a neuron needs at least one weight".to_string(),
            });
        }
        Ok(Neuron {
            weights: Value::leaves(weights),
            bias: Value::new(bias),
            activation,
        })
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Computes this neuron's output node for `inputs`.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, NanogradError> {
        if inputs.len() != self.nin() {
            return Err(NanogradError::DimensionMismatch {
                expected: self.nin(),
                actual: inputs.len(),
            });
        }
        let act = inputs
            .iter()
            .zip(&self.weights)
            .fold(self.bias.clone(), |acc, (x, w)| acc.add(x.mul(w)));
        Ok(self.activation.apply(&act))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NanogradError> {
        Ok(vec![self.activate(inputs)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neuron({})", self.nin())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
