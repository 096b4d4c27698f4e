//! GNS configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::{GnsError, Result};
use crate::layer::LayerCenter;
use crate::neighborhood::GridMode;
use crate::objective::CostFunction;
use crate::space::BoundingBox;
use crate::vns::VnsConfig;

/// Search strategy run inside each neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchAlgorithm {
    /// [`crate::local_search::StochasticLocalSearch`].
    #[default]
    LocalSearch,
}

impl SearchAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::LocalSearch => "local_search",
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = GnsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "local_search" => Ok(SearchAlgorithm::LocalSearch),
            other => Err(GnsError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for a layered GNS run.
///
/// # Examples
///
/// ```
/// use u_gns::gns::GnsConfig;
/// use u_gns::objective::CostFunction;
///
/// let config = GnsConfig::default()
///     .with_dimension(2)
///     .with_num_layers(2)
///     .with_cells_per_dimension(3)
///     .with_cost_function(CostFunction::Schwefel);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GnsConfig {
    /// Number of coordinates of every point.
    pub dimension: usize,

    /// Number of nested layers. One layer is plain VNS over the full range.
    pub num_layers: usize,

    /// Grid cells along each axis of every layer; a layer holds up to
    /// `cells_per_dimension^dimension` neighborhoods.
    pub cells_per_dimension: usize,

    /// Benchmark function used by [`super::GnsRunner::run_benchmark`]; its
    /// conventional range is the base range when none is set.
    pub cost_function: CostFunction,

    /// Outermost search range. Falls back to the cost function's range.
    pub base_range: Option<BoundingBox>,

    /// How neighborhood grids are cut.
    pub grid_mode: GridMode,

    /// Where layers are centered.
    pub layer_center: LayerCenter,

    /// Strategy run inside each neighborhood.
    pub search_algorithm: SearchAlgorithm,

    /// Per-layer VNS settings, including the local-search parameters.
    pub vns: VnsConfig,

    /// Run layers concurrently. Requires the `parallel` feature; ignored
    /// otherwise. Results are identical to a sequential run.
    pub parallel: bool,
}

impl Default for GnsConfig {
    fn default() -> Self {
        Self {
            dimension: 2,
            num_layers: 1,
            cells_per_dimension: 4,
            cost_function: CostFunction::Schwefel,
            base_range: None,
            grid_mode: GridMode::default(),
            layer_center: LayerCenter::default(),
            search_algorithm: SearchAlgorithm::default(),
            vns: VnsConfig::default(),
            parallel: false,
        }
    }
}

impl GnsConfig {
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_num_layers(mut self, n: usize) -> Self {
        self.num_layers = n;
        self
    }

    pub fn with_cells_per_dimension(mut self, n: usize) -> Self {
        self.cells_per_dimension = n;
        self
    }

    pub fn with_cost_function(mut self, f: CostFunction) -> Self {
        self.cost_function = f;
        self
    }

    pub fn with_base_range(mut self, range: BoundingBox) -> Self {
        self.base_range = Some(range);
        self
    }

    pub fn with_grid_mode(mut self, mode: GridMode) -> Self {
        self.grid_mode = mode;
        self
    }

    pub fn with_layer_center(mut self, center: LayerCenter) -> Self {
        self.layer_center = center;
        self
    }

    pub fn with_search_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.search_algorithm = algorithm;
        self
    }

    pub fn with_vns(mut self, vns: VnsConfig) -> Self {
        self.vns = vns;
        self
    }

    pub fn with_initial_point(mut self, point: Vec<f64>) -> Self {
        self.vns.initial_point = Some(point);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The configured base range, or the cost function's conventional one.
    pub fn resolve_base_range(&self) -> Result<BoundingBox> {
        match &self.base_range {
            Some(range) => Ok(range.clone()),
            None => self.cost_function.default_range(self.dimension),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(GnsError::InvalidDimension {
                expected: 1,
                got: 0,
            });
        }
        if self.num_layers == 0 {
            return Err(GnsError::InvalidPartition(
                "num_layers must be at least 1".into(),
            ));
        }
        if self.cells_per_dimension == 0 {
            return Err(GnsError::InvalidPartition(
                "cells_per_dimension must be at least 1".into(),
            ));
        }
        if let Some(range) = &self.base_range {
            if range.dimension() != self.dimension {
                return Err(GnsError::InvalidDimension {
                    expected: self.dimension,
                    got: range.dimension(),
                });
            }
        }
        if let Some(point) = &self.vns.initial_point {
            if point.len() != self.dimension {
                return Err(GnsError::InvalidDimension {
                    expected: self.dimension,
                    got: point.len(),
                });
            }
        }
        self.vns.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GnsConfig::default();
        assert_eq!(config.dimension, 2);
        assert_eq!(config.num_layers, 1);
        assert_eq!(config.search_algorithm, SearchAlgorithm::LocalSearch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(
            "local_search".parse::<SearchAlgorithm>().unwrap(),
            SearchAlgorithm::LocalSearch
        );
        assert_eq!(
            "tabu_search".parse::<SearchAlgorithm>(),
            Err(GnsError::UnsupportedAlgorithm("tabu_search".into()))
        );
    }

    #[test]
    fn test_validate_zero_partition() {
        assert!(matches!(
            GnsConfig::default().with_num_layers(0).validate(),
            Err(GnsError::InvalidPartition(_))
        ));
        assert!(matches!(
            GnsConfig::default().with_cells_per_dimension(0).validate(),
            Err(GnsError::InvalidPartition(_))
        ));
    }

    #[test]
    fn test_validate_dimension_mismatch() {
        assert!(matches!(
            GnsConfig::default().with_dimension(0).validate(),
            Err(GnsError::InvalidDimension { .. })
        ));
        let config = GnsConfig::default()
            .with_dimension(3)
            .with_initial_point(vec![0.0, 0.0]);
        assert!(matches!(
            config.validate(),
            Err(GnsError::InvalidDimension {
                expected: 3,
                got: 2
            })
        ));
        let config = GnsConfig::default()
            .with_base_range(BoundingBox::uniform(3, -1.0, 1.0).unwrap());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_base_range() {
        let config = GnsConfig::default()
            .with_dimension(3)
            .with_cost_function(CostFunction::Rastrigin);
        assert_eq!(
            config.resolve_base_range().unwrap(),
            BoundingBox::uniform(3, -5.12, 5.12).unwrap()
        );
        let custom = BoundingBox::uniform(2, -1.0, 1.0).unwrap();
        let config = GnsConfig::default().with_base_range(custom.clone());
        assert_eq!(config.resolve_base_range().unwrap(), custom);
    }
}
