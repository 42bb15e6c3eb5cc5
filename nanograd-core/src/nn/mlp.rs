use crate::error::NanogradError;
use crate::nn::init::Init;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::neuron::Activation;
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Multi-layer perceptron: layers applied in sequence.
///
/// `Mlp::new(3, &[4, 4, 1], seed)` builds three layers of widths 4, 4 and 1
/// taking 3 inputs. Every layer, including the output one, uses `tanh` unless built
/// otherwise with [`Mlp::new_with_options`] or [`Mlp::from_layers`].
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds an MLP with parameters drawn from a `StdRng` seeded with `seed`.
    pub fn new(nin: usize, nouts: &[usize], seed: u64) -> Result<Self, NanogradError> {
        Self::new_with_rng(nin, nouts, &mut StdRng::seed_from_u64(seed))
    }

    /// Builds an MLP with `tanh` everywhere and `Init::default()` parameters.
    pub fn new_with_rng<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, NanogradError> {
        Self::new_with_options(nin, nouts, Activation::Tanh, Activation::Tanh, Init::default(), rng)
    }

    /// Builds an MLP choosing the hidden activation, the output-layer
    /// activation and the initialisation scheme.
    pub fn new_with_options<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        hidden: Activation,
        output: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NanogradError> {
        if nouts.is_empty() {
            return Err(NanogradError::InvalidArgument {
                operation: "Mlp::new".to_string(),
                reason: "at least one layer size is required".to_string(),
            });
        }
        init.validate()?;

        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        for (i, &nout) in nouts.iter().enumerate() {
            let activation = if i + 1 == nouts.len() { output } else { hidden };
            layers.push(Layer::new_with_rng(fan_in, nout, activation, init, rng)?);
            fan_in = nout;
        }
        log::debug!("Built MLP {} -> {:?}", nin, nouts);
        Ok(Mlp { layers })
    }

    /// Chains existing layers; each layer's fan-in must equal the previous
    /// layer's width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, NanogradError> {
        if layers.is_empty() {
            return Err(NanogradError::InvalidArgument {
                operation: "Mlp::from_layers".to_string(),
                reason: "at least one layer is required".to_string(),
            });
        }
        for pair in layers.windows(2) {
            if pair[1].nin() != pair[0].nout() {
                return Err(NanogradError::DimensionMismatch {
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    /// Forward pass for a network with a single output.
    ///
    /// # Errors
    /// `DimensionMismatch` if the last layer does not have exactly one neuron,
    /// or if `inputs` has the wrong width.
    pub fn forward_single(&self, inputs: &[Value]) -> Result<Value, NanogradError> {
        let mut outputs = self.forward(inputs)?;
        if outputs.len() != 1 {
            return Err(NanogradError::DimensionMismatch {
                expected: 1,
                actual: outputs.len(),
            });
        }
        outputs.pop().ok_or(NanogradError::DimensionMismatch {
            expected: 1,
            actual: 0,
        })
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NanogradError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP({} Layers)", self.layers.len())
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
