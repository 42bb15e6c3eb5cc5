use crate::error::NanogradError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::str::FromStr;

pub const ENV_STEPS: &str = "NANOGRAD_STEPS";
pub const ENV_LEARNING_RATE: &str = "NANOGRAD_LEARNING_RATE";
pub const ENV_LOG_EVERY: &str = "NANOGRAD_LOG_EVERY";
pub const ENV_SEED: &str = "NANOGRAD_SEED";

/// Settings of the [`fit`](crate::train::fit) training loop.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Number of full-batch gradient steps.
    pub steps: usize,
    pub learning_rate: f64,
    /// Emit an `info!` line every `log_every` steps (the last step is always logged).
    pub log_every: usize,
    /// Seed for parameter initialisation.
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            steps: 20,
            learning_rate: 0.1,
            log_every: 1,
            seed: 42,
        }
    }
}

impl TrainConfig {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects settings the training loop can not run with.
    pub fn validate(&self) -> Result<(), NanogradError> {
        if self.steps == 0 {
            return Err(invalid(ENV_STEPS, "must be at least 1".to_string()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(invalid(
                ENV_LEARNING_RATE,
                format!("must be finite and positive, got {}", self.learning_rate),
            ));
        }
        if self.log_every == 0 {
            return Err(invalid(ENV_LOG_EVERY, "must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Starts from the defaults and overrides every field whose environment
    /// variable is set, then validates the result.
    pub fn from_env() -> Result<Self, NanogradError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`TrainConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NanogradError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TrainConfig::default();
        let config = TrainConfig {
            steps: parse_var(&lookup, ENV_STEPS)?.unwrap_or(defaults.steps),
            learning_rate: parse_var(&lookup, ENV_LEARNING_RATE)?.unwrap_or(defaults.learning_rate),
            log_every: parse_var(&lookup, ENV_LOG_EVERY)?.unwrap_or(defaults.log_every),
            seed: parse_var(&lookup, ENV_SEED)?.unwrap_or(defaults.seed),
        };
        config.validate()?;
        Ok(config)
    }

    /// A fresh RNG seeded from `self.seed`.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

fn invalid(key: &str, reason: String) -> NanogradError {
    NanogradError::InvalidConfig {
        key: key.to_string(),
        reason,
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, NanogradError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| invalid(key, format!("cannot parse '{}': {}", raw, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TrainConfig::default();
        assert_eq!(config.steps, 20);
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.log_every, 1);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TrainConfig::default()
            .with_steps(5)
            .with_learning_rate(0.05)
            .with_log_every(2)
            .with_seed(7);
        assert_eq!(
            config,
            TrainConfig {
                steps: 5,
                learning_rate: 0.05,
                log_every: 2,
                seed: 7
            }
        );
    }

    #[test]
    fn test_validate_rejects() {
        let bad = [
            TrainConfig::default().with_steps(0),
            TrainConfig::default().with_learning_rate(0.0),
            TrainConfig::default().with_learning_rate(f64::INFINITY),
            TrainConfig::default().with_log_every(0),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(NanogradError::InvalidConfig { .. })),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_from_lookup_overrides() -> Result<(), NanogradError> {
        let config = TrainConfig::from_lookup(lookup_from(&[
            (ENV_STEPS, "50"),
            (ENV_LEARNING_RATE, " 0.05 "),
            (ENV_SEED, "9"),
        ]))?;
        assert_eq!(config.steps, 50);
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.log_every, 1);
        assert_eq!(config.seed, 9);
        Ok(())
    }

    #[test]
    fn test_from_lookup_empty_is_default() -> Result<(), NanogradError> {
        assert_eq!(TrainConfig::from_lookup(lookup_from(&[]))?, TrainConfig::default());
        Ok(())
    }

    #[test]
    fn test_from_lookup_parse_errors() {
        let err = TrainConfig::from_lookup(lookup_from(&[(ENV_STEPS, "many")])).err();
        assert!(matches!(
            err,
            Some(NanogradError::InvalidConfig { ref key, .. }) if key == ENV_STEPS
        ));

        let err = TrainConfig::from_lookup(lookup_from(&[(ENV_LOG_EVERY, "0")])).err();
        assert!(matches!(err, Some(NanogradError::InvalidConfig { .. })));
    }

    #[test]
    fn test_rng_is_seeded() {
        use rand::Rng;
        let config = TrainConfig::default();
        let a: f64 = config.rng().gen();
        let b: f64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
