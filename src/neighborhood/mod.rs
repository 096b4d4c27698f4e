//! Neighborhood generation.
//!
//! A layer's domain is cut into a regular grid of sub-boxes along every
//! axis. Each cell confines one local-search invocation; the grid order
//! is the order in which VNS visits them.

mod config;
mod generator;

pub use config::GridMode;
pub use generator::NeighborhoodGenerator;
