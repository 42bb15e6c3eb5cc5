// src/nn/mod.rs
// Neurons, layers and the multi-layer perceptron built on `Value`.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use init::Init;
pub use layer::Layer;
pub use losses::{mse_loss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::{Activation, Neuron};
