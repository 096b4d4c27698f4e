//! Objective functions.
//!
//! The search treats the objective as an opaque callable. The benchmark
//! functions here are the usual targets for comparing metaheuristics.

mod functions;
mod types;

pub use functions::{ackley, rastrigin, schwefel, sphere, CostFunction};
pub use types::Objective;
