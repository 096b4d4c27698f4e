//! Core trait for the local-search primitive.

use super::config::LocalSearchConfig;
use crate::error::Result;
use crate::objective::Objective;
use crate::space::BoundingBox;
use crate::state::Trajectory;

/// Outcome of one local-search invocation.
#[derive(Debug, Clone)]
pub struct LocalSearchOutcome {
    /// Best point found; lies inside the searched neighborhood.
    pub best: Vec<f64>,
    /// Cost at `best`.
    pub best_cost: f64,
    /// Every visited point with its cost, oldest first. Never empty.
    pub trajectory: Trajectory,
    /// Number of objective evaluations spent.
    pub evaluations: usize,
}

/// A bounded improvement procedure confined to one neighborhood.
///
/// Implementations receive the iteration cap and convergence threshold
/// through `config`, start from `initial` and must not leave
/// `neighborhood`. The returned trajectory is chronological and holds at
/// least the starting point.
///
/// A cost of `+inf` in the outcome means "nothing usable here" and is
/// never an improvement; NaN costs are rejected by the caller.
pub trait LocalSearch: Send + Sync {
    fn search<O: Objective + ?Sized>(
        &self,
        objective: &O,
        config: &LocalSearchConfig,
        initial: &[f64],
        neighborhood: &BoundingBox,
    ) -> Result<LocalSearchOutcome>;
}
