//! Layered Variable/General Neighborhood Search for continuous global
//! optimization.
//!
//! Minimizes a scalar objective over a bounded box without derivatives:
//!
//! - **Layers** ([`layer`]): nested boxes that stage the search from a
//!   narrow region out to the full domain.
//! - **Neighborhoods** ([`neighborhood`]): a regular grid of sub-boxes
//!   inside each layer.
//! - **Local search** ([`local_search`]): a bounded improvement procedure
//!   confined to one neighborhood, behind the [`local_search::LocalSearch`]
//!   trait.
//! - **VNS** ([`vns`]): scans a layer's neighborhoods, restarting from the
//!   first one after every strict improvement.
//! - **GNS** ([`gns`]): runs VNS per layer and keeps the best layer result.
//!
//! Benchmark objectives (Schwefel, Rastrigin, Sphere, Ackley) live in
//! [`objective`].
//!
//! # Example
//!
//! ```
//! use u_gns::gns::{GnsConfig, GnsRunner};
//! use u_gns::objective::CostFunction;
//! use u_gns::vns::VnsConfig;
//!
//! let config = GnsConfig::default()
//!     .with_dimension(2)
//!     .with_num_layers(2)
//!     .with_cells_per_dimension(3)
//!     .with_cost_function(CostFunction::Schwefel)
//!     .with_vns(VnsConfig::default().with_max_iterations(300).with_seed(42));
//!
//! let result = GnsRunner::run_benchmark(&config).unwrap();
//! println!("best {:?} at {}", result.best.x, result.best.cost);
//! ```
//!
//! # Logging
//!
//! Progress is reported through [`tracing`]; install a subscriber to see it.

pub mod error;
pub mod gns;
pub mod layer;
pub mod local_search;
pub mod neighborhood;
pub mod objective;
pub mod space;
pub mod state;
pub mod vns;

pub use error::{GnsError, Result};
