use crate::error::NanogradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Parameter initialisation scheme.
///
/// Sampling always draws from an explicitly passed RNG; there is no global
/// seed. Pass a seeded `StdRng` for reproducible models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter gets the same value.
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks that the distribution parameters are usable.
    pub fn validate(&self) -> Result<(), NanogradError> {
        let invalid = |reason: String| NanogradError::InvalidArgument {
            operation: "Init".to_string(),
            reason,
        };
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite()
                {
                    return Err(invalid(format!(
                        "uniform bounds must be finite with low < high and a finite width, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(invalid(format!(
                        "normal needs a finite mean and a finite, non-negative std, got mean {} std {}",
                        mean, std
                    )));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(invalid(format!("constant must be finite, got {}", value)));
                }
            }
        }
        Ok(())
    }

    /// Draws `n` values from this scheme.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, NanogradError> {
        self.validate()?;
        let values = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std).map_err(|e| NanogradError::InvalidArgument {
                    operation: "Init".to_string(),
                    reason: e.to_string(),
                })?;
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Init::Constant(value) => vec![value; n],
        };
        Ok(values)
    }

    /// Draws a single value from this scheme.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, NanogradError> {
        let mut values = self.sample_n(1, rng)?;
        values.pop().ok_or_else(|| NanogradError::InvalidArgument {
            operation: "Init".to_string(),
            reason: "no sample drawn".to_string(),
        })
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
