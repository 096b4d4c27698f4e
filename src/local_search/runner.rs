//! Bounded stochastic hill climbing.
//!
//! # Algorithm
//!
//! 1. Clamp the starting point into the neighborhood and evaluate it
//! 2. Propose a uniform perturbation within the current step radius,
//!    clamped to the box
//! 3. Accept strictly improving, finite candidates
//! 4. After `patience` consecutive rejections, halve the radius
//! 5. Stop when every radius is below the convergence threshold or the
//!    evaluation budget is spent

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::config::LocalSearchConfig;
use super::types::{LocalSearch, LocalSearchOutcome};
use crate::error::{GnsError, Result};
use crate::objective::Objective;
use crate::space::BoundingBox;
use crate::state::Trajectory;

const DEFAULT_SEED: u64 = 42;

/// Derivative-free hill climber confined to a box.
///
/// The random stream is seeded from the configured seed and the
/// neighborhood's bounds, so searching the same neighborhood twice with
/// the same configuration gives the same outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticLocalSearch;

impl LocalSearch for StochasticLocalSearch {
    fn search<O: Objective + ?Sized>(
        &self,
        objective: &O,
        config: &LocalSearchConfig,
        initial: &[f64],
        neighborhood: &BoundingBox,
    ) -> Result<LocalSearchOutcome> {
        config.validate()?;
        neighborhood.check_point(initial)?;

        let mut current = neighborhood.clamp(initial);
        let mut current_cost = objective.evaluate(&current);
        if !current_cost.is_finite() {
            return Err(GnsError::NonFiniteObjective { point: current });
        }

        let mut trajectory = Trajectory::new();
        trajectory.push(current.clone(), current_cost);

        let seed = config.seed.unwrap_or(DEFAULT_SEED) ^ neighborhood.fingerprint();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut radius: Vec<f64> = neighborhood
            .widths()
            .iter()
            .map(|w| w * config.initial_step)
            .collect();
        let mut rejected = 0;
        let mut evaluations = 1;

        while evaluations < config.max_iterations {
            if radius.iter().all(|&r| r < config.convergence_threshold) {
                break;
            }

            let candidate: Vec<f64> = current
                .iter()
                .zip(&radius)
                .zip(neighborhood.intervals())
                .map(|((&x, &r), iv)| {
                    if r > 0.0 {
                        iv.clamp(x + rng.random_range(-r..=r))
                    } else {
                        x
                    }
                })
                .collect();
            let cost = objective.evaluate(&candidate);
            evaluations += 1;

            if cost.is_finite() && cost < current_cost {
                current_cost = cost;
                current = candidate;
                trajectory.push(current.clone(), current_cost);
                rejected = 0;
            } else {
                rejected += 1;
                if rejected >= config.patience {
                    radius.iter_mut().for_each(|r| *r *= 0.5);
                    rejected = 0;
                }
            }
        }

        trace!(evaluations, cost = current_cost, "local search finished");

        Ok(LocalSearchOutcome {
            best: current,
            best_cost: current_cost,
            trajectory,
            evaluations,
        })
    }
}
