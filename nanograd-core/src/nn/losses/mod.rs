pub mod mse;

pub use mse::{mse_loss, Reduction};
