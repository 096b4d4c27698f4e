//! Layer generation.
//!
//! Layers are nested boxes that stage the search from a narrow region
//! around the center out to the full domain.

mod config;
mod generator;

pub use config::LayerCenter;
pub use generator::LayerGenerator;
