// nanograd-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! This module provides the `Optimizer` trait and stochastic gradient descent.
//! An optimizer holds handles to parameter leaves (shared with the model) and
//! updates their `data` in place from their accumulated `grad`.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
