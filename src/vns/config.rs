//! Variable Neighborhood Search configuration.

use crate::error::Result;
use crate::local_search::LocalSearchConfig;

/// Configuration parameters for a single-layer VNS scan.
///
/// # Examples
///
/// ```
/// use u_gns::vns::VnsConfig;
///
/// let config = VnsConfig::default()
///     .with_initial_point(vec![0.0, 0.0])
///     .with_max_iterations(1000)
///     .with_convergence_threshold(1e-6);
/// assert_eq!(config.local_search.max_iterations, 1000);
/// assert_eq!(config.initial_point, Some(vec![0.0, 0.0]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Parameters passed to every local-search invocation.
    pub local_search: LocalSearchConfig,

    /// Starting point for every invocation. When unset, each local
    /// search starts from the center of its neighborhood.
    pub initial_point: Option<Vec<f64>>,
}

impl VnsConfig {
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }

    pub fn with_initial_point(mut self, point: Vec<f64>) -> Self {
        self.initial_point = Some(point);
        self
    }

    /// Sets the local-search iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.local_search.max_iterations = n;
        self
    }

    /// Sets the local-search convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.local_search.convergence_threshold = threshold;
        self
    }

    /// Sets the local-search random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.local_search.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.local_search.validate()
    }
}
