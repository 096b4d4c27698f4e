//! Local search inside a single neighborhood.
//!
//! VNS only relies on the [`LocalSearch`] contract; any bounded,
//! convergence-limited improvement procedure can be plugged in.
//! [`StochasticLocalSearch`] is the default.

mod config;
mod runner;
mod types;

pub use config::LocalSearchConfig;
pub use runner::StochasticLocalSearch;
pub use types::{LocalSearch, LocalSearchOutcome};
