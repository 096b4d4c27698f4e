//! General Neighborhood Search (GNS): VNS applied layer by layer.
//!
//! The domain is staged into nested layers. Each layer is cut into a
//! grid of neighborhoods and searched with VNS independently; the best
//! layer result is the global answer. Layers share nothing except that
//! final min-reduction, so they can run concurrently (`parallel` feature).

mod config;
mod runner;

pub use config::{GnsConfig, SearchAlgorithm};
pub use runner::{GnsResult, GnsRunner, LayerResult};
