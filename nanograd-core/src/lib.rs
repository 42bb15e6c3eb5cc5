//! Scalar reverse-mode automatic differentiation, plus a small multi-layer
//! perceptron built on top of it.
//!
//! Every arithmetic operation on a [`Value`] computes its result immediately and
//! records its operands; [`Value::backward`] then walks the recorded graph in
//! reverse topological order and accumulates exact gradients into every node.

// Core engine
pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;
pub mod value_data;

// Collaborators built on the engine
pub mod config;
pub mod nn;
pub mod optim;
pub mod train;
pub mod utils;

pub use config::TrainConfig;
pub use error::NanogradError;
pub use ops::Operand;
pub use train::{fit, TrainReport};
pub use value::Value;
