use crate::error::NanogradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::neuron::{Activation, Neuron};
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `nout` independent neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new_with_rng<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NanogradError> {
        let neurons = (0..nout)
            .map(|_| Neuron::new_with_rng(nin, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_neurons(neurons)
    }

    /// Builds a layer from existing neurons, which must all have the same fan-in.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NanogradError> {
        let first = neurons.first().ok_or_else(|| NanogradError::InvalidArgument {
            operation: "Layer::new".to_string(),
            reason: "a layer needs at least one neuron".to_string(),
        })?;
        let nin = first.nin();
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(NanogradError::DimensionMismatch {
                expected: nin,
                actual: bad.nin(),
            });
        }
        Ok(Layer { neurons })
    }

    pub fn nin(&self) -> usize {
        // from_neurons guarantees at least one neuron
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One output node per neuron, in neuron order.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NanogradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer({} Neurons)", self.nout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_shapes() -> Result<(), NanogradError> {
        let mut rng = StdRng::seed_from_u64(11);
        let layer = Layer::new_with_rng(3, 4, Activation::Tanh, Init::default(), &mut rng)?;
        assert_eq!(layer.nin(), 3);
        assert_eq!(layer.nout(), 4);
        assert_eq!(layer.num_parameters(), 16);
        assert_eq!(layer.forward_data(&[1.0, 2.0, 3.0])?.len(), 4);
        assert_eq!(layer.to_string(), "Layer(4 Neurons)");
        Ok(())
    }

    #[test]
    fn test_single_output() -> Result<(), NanogradError> {
        let layer = Layer::from_neurons(vec![Neuron::from_parameters(
            &[2.0],
            1.0,
            Activation::Linear,
        )?])?;
        let out = layer.forward_data(&[3.0])?;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data(), 7.0);
        Ok(())
    }

    #[test]
    fn test_inconsistent_neurons_rejected() -> Result<(), NanogradError> {
        let a = Neuron::from_parameters(&[1.0, 1.0], 0.0, Activation::Tanh)?;
        let b = Neuron::from_parameters(&[1.0], 0.0, Activation::Tanh)?;
        assert_eq!(
            Layer::from_neurons(vec![a, b]).err(),
            Some(NanogradError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert!(Layer::from_neurons(Vec::new()).is_err());
        Ok(())
    }

    #[test]
    fn test_input_width_checked() -> Result<(), NanogradError> {
        let mut rng = StdRng::seed_from_u64(11);
        let layer = Layer::new_with_rng(2, 3, Activation::Relu, Init::default(), &mut rng)?;
        assert!(matches!(
            layer.forward_data(&[1.0]),
            Err(NanogradError::DimensionMismatch { expected: 2, actual: 1 })
        ));
        Ok(())
    }
}
