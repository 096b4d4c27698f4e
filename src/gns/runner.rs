//! GNS execution: one VNS scan per layer, then a min-reduction.
//!
//! # Algorithm
//!
//! 1. Generate nested layers, innermost first
//! 2. For each layer: cut it into neighborhoods and run VNS
//! 3. Pick the layer whose best cost is strictly lowest; ties keep the
//!    innermost layer
//! 4. Concatenate the per-layer trajectories in layer order

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::{GnsConfig, SearchAlgorithm};
use crate::error::{GnsError, Result};
use crate::layer::LayerGenerator;
use crate::local_search::{LocalSearch, StochasticLocalSearch};
use crate::neighborhood::NeighborhoodGenerator;
use crate::objective::Objective;
use crate::space::BoundingBox;
use crate::state::{cost_or_infinity, improves, SearchState, Trajectory};
use crate::vns::{VnsConfig, VnsRunner};

/// Outcome of the VNS scan of one layer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerResult {
    /// Layer index, innermost = 0.
    pub index: usize,
    /// The layer's bounding box.
    pub bounds: BoundingBox,
    /// Number of neighborhoods scanned.
    pub neighborhood_count: usize,
    /// Best solution of the layer, if any.
    pub best: Option<SearchState>,
    /// Incumbent cost after each local-search invocation.
    pub cost_history: Vec<f64>,
    /// Number of local-search invocations.
    pub invocations: usize,
    /// Number of scan restarts.
    pub improvements: usize,
}

impl LayerResult {
    /// The layer's best solution.
    ///
    /// Fails with [`GnsError::EmptyNeighborhoodSet`] when the layer had no
    /// neighborhoods, and with [`GnsError::NoSolution`] when every local
    /// search came back at `+inf`.
    pub fn solution(&self) -> Result<&SearchState> {
        if self.neighborhood_count == 0 {
            return Err(GnsError::EmptyNeighborhoodSet { layer: self.index });
        }
        self.best.as_ref().ok_or(GnsError::NoSolution)
    }

    pub fn best_cost(&self) -> f64 {
        cost_or_infinity(self.best.as_ref())
    }
}

/// Result of a GNS run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GnsResult {
    /// Global best solution.
    pub best: SearchState,
    /// Index of the layer that produced `best`.
    pub best_layer: usize,
    /// Per-layer outcomes, innermost first.
    pub layers: Vec<LayerResult>,
    /// All local-search trajectories, layer by layer.
    pub trajectory: Trajectory,
}

impl GnsResult {
    /// Total local-search invocations across layers.
    pub fn invocations(&self) -> usize {
        self.layers.iter().map(|l| l.invocations).sum()
    }
}

/// Layered neighborhood search runner.
pub struct GnsRunner;

impl GnsRunner {
    /// Runs GNS on the configured benchmark function.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_gns::gns::{GnsConfig, GnsRunner};
    /// use u_gns::objective::CostFunction;
    ///
    /// let config = GnsConfig::default()
    ///     .with_dimension(2)
    ///     .with_num_layers(2)
    ///     .with_cells_per_dimension(2)
    ///     .with_cost_function(CostFunction::Sphere);
    /// let result = GnsRunner::run_benchmark(&config).unwrap();
    /// assert!(result.best.cost < 1e-6);
    /// ```
    pub fn run_benchmark(config: &GnsConfig) -> Result<GnsResult> {
        Self::run(&config.cost_function, config)
    }

    /// Runs GNS on `objective` with the configured search algorithm.
    pub fn run<O: Objective + ?Sized>(objective: &O, config: &GnsConfig) -> Result<GnsResult> {
        match config.search_algorithm {
            SearchAlgorithm::LocalSearch => {
                Self::run_with_local_search(objective, config, &StochasticLocalSearch)
            }
        }
    }

    /// Runs GNS on `objective` with a caller-supplied local search.
    pub fn run_with_local_search<O, L>(
        objective: &O,
        config: &GnsConfig,
        local_search: &L,
    ) -> Result<GnsResult>
    where
        O: Objective + ?Sized,
        L: LocalSearch,
    {
        config.validate()?;
        let base = config.resolve_base_range()?;
        let layers = LayerGenerator::generate(
            config.dimension,
            config.num_layers,
            &base,
            config.layer_center,
        )?;

        info!(
            dimension = config.dimension,
            layers = config.num_layers,
            cells = config.cells_per_dimension,
            algorithm = %config.search_algorithm,
            "starting gns"
        );

        Self::execute(
            objective,
            &layers,
            |_, layer| {
                NeighborhoodGenerator::generate(
                    layer,
                    config.dimension,
                    config.cells_per_dimension,
                    config.grid_mode,
                )
            },
            local_search,
            &config.vns,
            config.parallel,
        )
    }

    /// Runs VNS on every layer in order and reduces to the global best.
    ///
    /// `neighborhoods_for` maps `(layer index, layer box)` to that layer's
    /// neighborhoods in scan order.
    ///
    /// # Errors
    ///
    /// [`GnsError::NoSolution`] if no layer produced a solution; otherwise
    /// the first error raised while processing the layers.
    pub fn run_with<O, L, F>(
        objective: &O,
        layers: &[BoundingBox],
        neighborhoods_for: F,
        local_search: &L,
        vns_config: &VnsConfig,
    ) -> Result<GnsResult>
    where
        O: Objective + ?Sized,
        L: LocalSearch,
        F: Fn(usize, &BoundingBox) -> Result<Vec<BoundingBox>> + Sync,
    {
        Self::execute(
            objective,
            layers,
            neighborhoods_for,
            local_search,
            vns_config,
            false,
        )
    }

    fn execute<O, L, F>(
        objective: &O,
        layers: &[BoundingBox],
        neighborhoods_for: F,
        local_search: &L,
        vns_config: &VnsConfig,
        parallel: bool,
    ) -> Result<GnsResult>
    where
        O: Objective + ?Sized,
        L: LocalSearch,
        F: Fn(usize, &BoundingBox) -> Result<Vec<BoundingBox>> + Sync,
    {
        let outcomes = map_layers(layers, parallel, |index, bounds| {
            let neighborhoods = neighborhoods_for(index, bounds)?;
            if neighborhoods.is_empty() {
                warn!(layer = index, "layer has no usable neighborhoods");
            }
            debug!(
                layer = index,
                neighborhoods = neighborhoods.len(),
                "scanning layer"
            );

            let vns = VnsRunner::run(objective, &neighborhoods, local_search, vns_config)?;
            let layer = LayerResult {
                index,
                bounds: bounds.clone(),
                neighborhood_count: neighborhoods.len(),
                best: vns.best,
                cost_history: vns.cost_history,
                invocations: vns.invocations,
                improvements: vns.improvements,
            };
            info!(
                layer = index,
                cost = layer.best_cost(),
                invocations = layer.invocations,
                "layer finished"
            );
            Ok((layer, vns.trajectory))
        })?;

        let mut trajectory = Trajectory::new();
        let mut results = Vec::with_capacity(outcomes.len());
        let mut best: Option<(usize, SearchState)> = None;

        for (layer, mut layer_trajectory) in outcomes {
            trajectory.append(&mut layer_trajectory);
            if let Some(state) = &layer.best {
                if improves(best.as_ref().map(|(_, s)| s), state.cost) {
                    best = Some((layer.index, state.clone()));
                }
            } else if layer.neighborhood_count > 0 {
                warn!(layer = layer.index, "layer produced no solution");
            }
            results.push(layer);
        }

        let Some((best_layer, best)) = best else {
            warn!("no layer produced a solution");
            return Err(GnsError::NoSolution);
        };

        info!(layer = best_layer, cost = best.cost, x = ?best.x, "gns finished");

        Ok(GnsResult {
            best,
            best_layer,
            layers: results,
            trajectory,
        })
    }
}

#[cfg(feature = "parallel")]
fn map_layers<R, G>(layers: &[BoundingBox], parallel: bool, f: G) -> Result<Vec<R>>
where
    R: Send,
    G: Fn(usize, &BoundingBox) -> Result<R> + Sync,
{
    if parallel {
        layers
            .par_iter()
            .enumerate()
            .map(|(i, layer)| f(i, layer))
            .collect()
    } else {
        layers
            .iter()
            .enumerate()
            .map(|(i, layer)| f(i, layer))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn map_layers<R, G>(layers: &[BoundingBox], _parallel: bool, f: G) -> Result<Vec<R>>
where
    G: Fn(usize, &BoundingBox) -> Result<R>,
{
    layers
        .iter()
        .enumerate()
        .map(|(i, layer)| f(i, layer))
        .collect()
}
