//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm (restart-on-improvement scan)
//!
//! 1. Set the incumbent to none (cost +inf) and k = 0
//! 2. While k < number of neighborhoods:
//!    a. **Local search** confined to neighborhood k
//!    b. Append its trajectory to the history
//!    c. **Move or not**: if the returned cost is strictly below the
//!    incumbent's, replace the incumbent and set k = 0;
//!    otherwise k = k + 1
//! 3. Stop after a full pass without improvement
//!
//! Moving on to the next grid cell is the shaking step. Each improvement
//! restarts the scan, so at worst O(n²) local searches are run for n
//! neighborhoods.
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use tracing::debug;

use super::config::VnsConfig;
use crate::error::{GnsError, Result};
use crate::local_search::LocalSearch;
use crate::objective::Objective;
use crate::space::BoundingBox;
use crate::state::{cost_or_infinity, improves, SearchState, Trajectory};

/// Result of a VNS run over one set of neighborhoods.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsResult {
    /// Best solution found, or `None` if no local search returned a
    /// cost below `+inf` (including the empty neighborhood list).
    pub best: Option<SearchState>,
    /// Every point visited by every local search, in order.
    pub trajectory: Trajectory,
    /// Incumbent cost after each local-search invocation.
    pub cost_history: Vec<f64>,
    /// Number of local-search invocations.
    pub invocations: usize,
    /// Number of strict improvements (scan restarts).
    pub improvements: usize,
}

impl VnsResult {
    /// Incumbent cost, `+inf` when nothing was found.
    pub fn best_cost(&self) -> f64 {
        cost_or_infinity(self.best.as_ref())
    }
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Scans `neighborhoods` with `local_search`, restarting from the first
    /// neighborhood after every strict improvement.
    ///
    /// # Errors
    ///
    /// - [`GnsError::InvalidDimension`] if the configured initial point
    ///   does not match the neighborhoods.
    /// - [`GnsError::NonFiniteObjective`] if a local search reports NaN.
    /// - Any error raised by the local search itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_gns::local_search::StochasticLocalSearch;
    /// use u_gns::objective::sphere;
    /// use u_gns::space::BoundingBox;
    /// use u_gns::vns::{VnsConfig, VnsRunner};
    ///
    /// let cells = vec![
    ///     BoundingBox::uniform(1, -2.0, 0.0).unwrap(),
    ///     BoundingBox::uniform(1, 0.0, 2.0).unwrap(),
    /// ];
    /// let config = VnsConfig::default().with_seed(1);
    /// let result = VnsRunner::run(&sphere, &cells, &StochasticLocalSearch, &config).unwrap();
    /// assert!(result.best_cost() < 1e-6);
    /// ```
    pub fn run<O, L>(
        objective: &O,
        neighborhoods: &[BoundingBox],
        local_search: &L,
        config: &VnsConfig,
    ) -> Result<VnsResult>
    where
        O: Objective + ?Sized,
        L: LocalSearch,
    {
        config.validate()?;
        if let (Some(point), Some(first)) = (&config.initial_point, neighborhoods.first()) {
            first.check_point(point)?;
        }

        let mut best: Option<SearchState> = None;
        let mut trajectory = Trajectory::new();
        let mut cost_history = Vec::new();
        let mut invocations = 0;
        let mut improvements = 0;

        let mut k = 0;
        while k < neighborhoods.len() {
            let neighborhood = &neighborhoods[k];
            let center;
            let start: &[f64] = match &config.initial_point {
                Some(point) => point,
                None => {
                    center = neighborhood.center();
                    &center
                }
            };

            let mut outcome =
                local_search.search(objective, &config.local_search, start, neighborhood)?;
            invocations += 1;
            trajectory.append(&mut outcome.trajectory);

            if outcome.best_cost.is_nan() {
                return Err(GnsError::NonFiniteObjective {
                    point: outcome.best,
                });
            }

            if improves(best.as_ref(), outcome.best_cost) {
                debug!(
                    neighborhood = k,
                    cost = outcome.best_cost,
                    "vns improvement, restarting scan"
                );
                best = Some(SearchState::new(outcome.best, outcome.best_cost));
                improvements += 1;
                k = 0;
            } else {
                k += 1;
            }

            cost_history.push(cost_or_infinity(best.as_ref()));
        }

        Ok(VnsResult {
            best,
            trajectory,
            cost_history,
            invocations,
            improvements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::{LocalSearchConfig, LocalSearchOutcome, StochasticLocalSearch};
    use crate::neighborhood::{GridMode, NeighborhoodGenerator};
    use crate::objective::CostFunction;
    use std::sync::Mutex;

    /// Returns cost 0 at the origin for boxes that contain it, `+inf` elsewhere.
    struct OriginStub;

    impl LocalSearch for OriginStub {
        fn search<O: Objective + ?Sized>(
            &self,
            _objective: &O,
            _config: &LocalSearchConfig,
            _initial: &[f64],
            neighborhood: &BoundingBox,
        ) -> Result<LocalSearchOutcome> {
            let origin = vec![0.0; neighborhood.dimension()];
            let (best, cost) = if neighborhood.contains(&origin) {
                (origin, 0.0)
            } else {
                (neighborhood.center(), f64::INFINITY)
            };
            let mut trajectory = Trajectory::new();
            trajectory.push(best.clone(), cost);
            Ok(LocalSearchOutcome {
                best,
                best_cost: cost,
                trajectory,
                evaluations: 1,
            })
        }
    }

    /// Fixed cost per neighborhood, keyed by the lower edge of axis 0.
    struct ScriptedStub {
        costs: Vec<(f64, f64)>,
        calls: Mutex<Vec<usize>>,
    }

    impl LocalSearch for ScriptedStub {
        fn search<O: Objective + ?Sized>(
            &self,
            _objective: &O,
            _config: &LocalSearchConfig,
            _initial: &[f64],
            neighborhood: &BoundingBox,
        ) -> Result<LocalSearchOutcome> {
            let low = neighborhood.interval(0).low();
            let index = self
                .costs
                .iter()
                .position(|&(l, _)| l == low)
                .expect("scripted neighborhood");
            self.calls.lock().unwrap().push(index);
            let cost = self.costs[index].1;
            let mut trajectory = Trajectory::new();
            trajectory.push(neighborhood.center(), cost);
            Ok(LocalSearchOutcome {
                best: neighborhood.center(),
                best_cost: cost,
                trajectory,
                evaluations: 1,
            })
        }
    }

    fn unit_cells(lows: &[f64]) -> Vec<BoundingBox> {
        lows.iter()
            .map(|&l| BoundingBox::uniform(1, l, l + 1.0).unwrap())
            .collect()
    }

    fn zero(_: &[f64]) -> f64 {
        0.0
    }

    #[test]
    fn test_vns_origin_stub_finds_origin() {
        let domain = BoundingBox::uniform(2, -9.0, 9.0).unwrap();
        let mut cells = NeighborhoodGenerator::generate(&domain, 2, 3, GridMode::Exact).unwrap();

        let forward = VnsRunner::run(&zero, &cells, &OriginStub, &VnsConfig::default()).unwrap();
        cells.reverse();
        let backward = VnsRunner::run(&zero, &cells, &OriginStub, &VnsConfig::default()).unwrap();

        for result in [forward, backward] {
            let best = result.best.expect("origin cell should yield a solution");
            assert_eq!(best.cost, 0.0);
            assert!(best.x.iter().all(|v| v.abs() < 1e-12));
        }
    }

    #[test]
    fn test_vns_empty_neighborhoods() {
        let result = VnsRunner::run(&zero, &[], &OriginStub, &VnsConfig::default()).unwrap();
        assert!(result.best.is_none());
        assert_eq!(result.best_cost(), f64::INFINITY);
        assert_eq!(result.invocations, 0);
        assert!(result.trajectory.is_empty());
    }

    #[test]
    fn test_vns_all_infinite_is_no_solution() {
        let cells = vec![BoundingBox::uniform(2, 1.0, 2.0).unwrap()];
        let result = VnsRunner::run(&zero, &cells, &OriginStub, &VnsConfig::default()).unwrap();
        assert!(result.best.is_none());
        assert_eq!(result.invocations, 1);
    }

    #[test]
    fn test_vns_restart_on_improvement() {
        let stub = ScriptedStub {
            costs: vec![(0.0, 5.0), (1.0, 3.0), (2.0, 4.0)],
            calls: Mutex::new(Vec::new()),
        };
        let cells = unit_cells(&[0.0, 1.0, 2.0]);

        let result = VnsRunner::run(&zero, &cells, &stub, &VnsConfig::default()).unwrap();

        assert_eq!(*stub.calls.lock().unwrap(), vec![0, 0, 1, 0, 1, 2]);
        assert_eq!(result.invocations, 6);
        assert_eq!(result.improvements, 2);
        assert_eq!(result.cost_history, vec![5.0, 5.0, 3.0, 3.0, 3.0, 3.0]);
        assert_eq!(result.best_cost(), 3.0);
        assert_eq!(result.trajectory.len(), 6);
    }

    #[test]
    fn test_vns_tie_keeps_first() {
        let stub = ScriptedStub {
            costs: vec![(0.0, 1.0), (1.0, 1.0)],
            calls: Mutex::new(Vec::new()),
        };
        let cells = unit_cells(&[0.0, 1.0]);
        let result = VnsRunner::run(&zero, &cells, &stub, &VnsConfig::default()).unwrap();
        assert_eq!(result.best.unwrap().x, vec![0.5]);
        assert_eq!(result.improvements, 1);
    }

    #[test]
    fn test_vns_nan_cost_rejected() {
        let stub = ScriptedStub {
            costs: vec![(0.0, f64::NAN)],
            calls: Mutex::new(Vec::new()),
        };
        let cells = unit_cells(&[0.0]);
        let err = VnsRunner::run(&zero, &cells, &stub, &VnsConfig::default()).unwrap_err();
        assert!(matches!(err, GnsError::NonFiniteObjective { .. }));
    }

    #[test]
    fn test_vns_initial_point_dimension_checked() {
        let cells = unit_cells(&[0.0]);
        let config = VnsConfig::default().with_initial_point(vec![0.0, 0.0]);
        let err = VnsRunner::run(&zero, &cells, &OriginStub, &config).unwrap_err();
        assert!(matches!(
            err,
            GnsError::InvalidDimension {
                expected: 1,
                got: 2
            }
        ));
    }

    #[test]
    fn test_vns_cost_history_non_increasing() {
        let domain = CostFunction::Schwefel.default_range(2).unwrap();
        let cells = NeighborhoodGenerator::generate(&domain, 2, 4, GridMode::Exact).unwrap();
        let config = VnsConfig::default().with_max_iterations(300).with_seed(42);

        let result =
            VnsRunner::run(&CostFunction::Schwefel, &cells, &StochasticLocalSearch, &config)
                .unwrap();

        assert_eq!(result.cost_history.len(), result.invocations);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        let best = result.best.unwrap();
        assert!(domain.contains(&best.x));
        assert!((CostFunction::Schwefel.evaluate(&best.x) - best.cost).abs() < 1e-9);
    }

    #[test]
    fn test_vns_idempotent() {
        let domain = CostFunction::Rastrigin.default_range(2).unwrap();
        let cells = NeighborhoodGenerator::generate(&domain, 2, 3, GridMode::Exact).unwrap();
        let config = VnsConfig::default()
            .with_initial_point(vec![1.0, -1.0])
            .with_max_iterations(200)
            .with_seed(9);

        let a = VnsRunner::run(&CostFunction::Rastrigin, &cells, &StochasticLocalSearch, &config)
            .unwrap();
        let b = VnsRunner::run(&CostFunction::Rastrigin, &cells, &StochasticLocalSearch, &config)
            .unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.invocations, b.invocations);
    }
}
