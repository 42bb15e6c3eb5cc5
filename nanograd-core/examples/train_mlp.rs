//! # Training a small MLP
//!
//! Fits `MLP(3, [4, 4, 1])` to four hand-written samples with full-batch SGD on
//! the summed squared error.
//!
//! Settings come from the environment (defaults in parentheses):
//! `NANOGRAD_STEPS` (20), `NANOGRAD_LEARNING_RATE` (0.1),
//! `NANOGRAD_LOG_EVERY` (1), `NANOGRAD_SEED` (42).
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`

use nanograd_core::nn::{Mlp, Module};
use nanograd_core::{fit, NanogradError, TrainConfig};

fn main() -> Result<(), NanogradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrainConfig::from_env()?;
    let mlp = Mlp::new_with_rng(3, &[4, 4, 1], &mut config.rng())?;
    println!("{} with {} parameters", mlp, mlp.num_parameters());

    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let report = fit(&mlp, &xs, &ys, &config)?;

    if let (Some(first), Some(last)) = (report.losses.first(), report.final_loss()) {
        println!("loss: {:.6} -> {:.6}", first, last);
    }
    for (pred, target) in report.predictions.iter().zip(ys) {
        println!("prediction {:+.4}  target {:+.1}", pred, target);
    }
    Ok(())
}
