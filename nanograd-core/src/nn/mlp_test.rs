use super::Mlp;
use crate::error::NanogradError;
use crate::nn::init::Init;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::neuron::{Activation, Neuron};
use crate::value::Value;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_parameter_count() -> Result<(), NanogradError> {
    let mlp = Mlp::new_with_rng(3, &[4, 4, 1], &mut seeded(0))?;
    // (3+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.num_parameters(), 41);
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.nin(), 3);
    assert_eq!(mlp.nout(), 1);
    assert_eq!(mlp.to_string(), "MLP(3 Layers)");
    Ok(())
}

#[test]
fn test_seeded_constructor() -> Result<(), NanogradError> {
    let data = |mlp: &Mlp| mlp.parameters().iter().map(Value::data).collect::<Vec<_>>();
    let mlp = Mlp::new(2, &[3, 1], 9)?;
    assert_eq!(mlp.num_parameters(), 3 * 3 + 4);
    // same as threading an explicitly seeded rng
    let explicit = Mlp::new_with_rng(2, &[3, 1], &mut seeded(9))?;
    assert_eq!(data(&mlp), data(&explicit));
    assert_eq!(data(&mlp), data(&Mlp::new(2, &[3, 1], 9)?));
    Ok(())
}

#[test]
fn test_single_output_forward() -> Result<(), NanogradError> {
    let mlp = Mlp::new_with_rng(3, &[4, 4, 1], &mut seeded(1))?;
    let out = mlp.forward_single(&Value::leaves(&[2.0, 3.0, -1.0]))?;
    // tanh output layer
    assert!(out.data() > -1.0 && out.data() < 1.0);

    let wide = Mlp::new_with_rng(3, &[2], &mut seeded(1))?;
    assert!(matches!(
        wide.forward_single(&Value::leaves(&[2.0, 3.0, -1.0])),
        Err(NanogradError::DimensionMismatch { expected: 1, actual: 2 })
    ));
    Ok(())
}

#[test]
fn test_seeded_init_is_reproducible() -> Result<(), NanogradError> {
    let data = |mlp: &Mlp| mlp.parameters().iter().map(Value::data).collect::<Vec<_>>();
    let a = Mlp::new_with_rng(3, &[4, 4, 1], &mut seeded(42))?;
    let b = Mlp::new_with_rng(3, &[4, 4, 1], &mut seeded(42))?;
    let c = Mlp::new_with_rng(3, &[4, 4, 1], &mut seeded(43))?;
    assert_eq!(data(&a), data(&b));
    assert_ne!(data(&a), data(&c));
    Ok(())
}

#[test]
fn test_zero_grad_clears_every_parameter() -> Result<(), NanogradError> {
    let mlp = Mlp::new_with_rng(3, &[4, 4, 1], &mut seeded(5))?;
    let out = mlp.forward_single(&Value::leaves(&[0.5, -0.2, 0.1]))?;
    out.backward();
    assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_options_output_activation() -> Result<(), NanogradError> {
    let mlp = Mlp::new_with_options(
        2,
        &[3, 1],
        Activation::Relu,
        Activation::Linear,
        Init::Constant(1.0),
        &mut seeded(0),
    )?;
    // hidden: relu(1 + 1 + 1) = 3 each; output: 1 + 3 * 3 = 10
    let out = mlp.forward_single(&Value::leaves(&[1.0, 1.0]))?;
    assert_eq!(out.data(), 10.0);
    Ok(())
}

#[test]
fn test_invalid_architectures() -> Result<(), NanogradError> {
    assert!(matches!(
        Mlp::new_with_rng(3, &[], &mut seeded(0)),
        Err(NanogradError::InvalidArgument { .. })
    ));
    assert!(Mlp::new_with_rng(3, &[4, 0, 1], &mut seeded(0)).is_err());

    let l1 = Layer::from_neurons(vec![Neuron::from_parameters(&[1.0], 0.0, Activation::Tanh)?])?;
    let l2 = Layer::from_neurons(vec![Neuron::from_parameters(
        &[1.0, 1.0],
        0.0,
        Activation::Tanh,
    )?])?;
    assert_eq!(
        Mlp::from_layers(vec![l1, l2]).err(),
        Some(NanogradError::DimensionMismatch {
            expected: 1,
            actual: 2
        })
    );
    Ok(())
}
