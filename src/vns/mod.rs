//! Variable Neighborhood Search (VNS) over a fixed list of neighborhoods.
//!
//! Local search is run inside each neighborhood in grid order. Any strict
//! improvement of the incumbent restarts the scan from the first
//! neighborhood; the scan ends after a full pass without improvement.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;

pub use config::VnsConfig;
pub use runner::{VnsResult, VnsRunner};
