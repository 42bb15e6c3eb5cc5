use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Routes `log` output through the test harness. Safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n` points drawn uniformly from `[low, high)` with a fixed seed.
#[allow(dead_code)]
pub fn random_points(seed: u64, n: usize, low: f64, high: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(low..high)).collect()
}

/// The 4-sample toy dataset used throughout the training tests.
#[allow(dead_code)]
pub fn toy_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}
