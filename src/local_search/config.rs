//! Local search configuration.

use crate::error::{GnsError, Result};

/// Parameters handed to every local-search invocation.
///
/// # Examples
///
/// ```
/// use u_gns::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(500)
///     .with_convergence_threshold(1e-4)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Maximum number of objective evaluations per invocation, counting the
    /// starting point. The start is always evaluated, even at zero.
    pub max_iterations: usize,

    /// The search stops once every per-axis step radius falls below this.
    pub convergence_threshold: f64,

    /// Starting step radius as a fraction of the neighborhood width, in `(0, 1]`.
    pub initial_step: f64,

    /// Consecutive rejected candidates before the step radius is halved.
    pub patience: usize,

    /// Random seed (None for default seed).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            convergence_threshold: 1e-6,
            initial_step: 0.25,
            patience: 10,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_initial_step(mut self, fraction: f64) -> Self {
        self.initial_step = fraction;
        self
    }

    pub fn with_patience(mut self, n: usize) -> Self {
        self.patience = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return Err(GnsError::InvalidConfig(format!(
                "convergence_threshold must be finite and non-negative, got {}",
                self.convergence_threshold
            )));
        }
        if !(self.initial_step > 0.0 && self.initial_step <= 1.0) {
            return Err(GnsError::InvalidConfig(format!(
                "initial_step must be in (0, 1], got {}",
                self.initial_step
            )));
        }
        if self.patience == 0 {
            return Err(GnsError::InvalidConfig("patience must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert!((config.convergence_threshold - 1e-6).abs() < 1e-15);
        assert_eq!(config.patience, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_threshold() {
        let config = LocalSearchConfig::default().with_convergence_threshold(-1.0);
        assert!(config.validate().is_err());
        let config = LocalSearchConfig::default().with_convergence_threshold(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_step() {
        assert!(LocalSearchConfig::default()
            .with_initial_step(0.0)
            .validate()
            .is_err());
        assert!(LocalSearchConfig::default()
            .with_initial_step(1.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_patience() {
        let config = LocalSearchConfig::default().with_patience(0);
        assert!(matches!(config.validate(), Err(GnsError::InvalidConfig(_))));
    }
}
