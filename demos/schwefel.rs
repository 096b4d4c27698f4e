//! Layered GNS on the Schwefel function.
//!
//! ```text
//! cargo run --example schwefel -- [dimension] [cells_per_dimension] [num_layers] [algorithm]
//! RUST_LOG=u_gns=debug cargo run --example schwefel -- 2 4 2
//! ```

use std::error::Error;

use tracing_subscriber::EnvFilter;
use u_gns::gns::{GnsConfig, GnsRunner, SearchAlgorithm};
use u_gns::objective::CostFunction;
use u_gns::vns::VnsConfig;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T, Box<dyn Error>>
where
    T::Err: Error + 'static,
{
    match args.get(index) {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dimension: usize = arg(&args, 0, 2)?;
    let cells: usize = arg(&args, 1, 4)?;
    let layers: usize = arg(&args, 2, 2)?;
    let algorithm: SearchAlgorithm = match args.get(3) {
        Some(name) => name.parse()?,
        None => SearchAlgorithm::LocalSearch,
    };

    let config = GnsConfig::default()
        .with_dimension(dimension)
        .with_cells_per_dimension(cells)
        .with_num_layers(layers)
        .with_cost_function(CostFunction::Schwefel)
        .with_search_algorithm(algorithm)
        .with_vns(
            VnsConfig::default()
                .with_initial_point(vec![0.0; dimension])
                .with_max_iterations(1000)
                .with_convergence_threshold(1e-6)
                .with_seed(42),
        );

    let result = GnsRunner::run_benchmark(&config)?;

    println!("Global best x: {:?}", result.best.x);
    println!("Global best cost: {}", result.best.cost);
    println!(
        "Best layer: {} ({} local searches, {} trajectory points)",
        result.best_layer,
        result.invocations(),
        result.trajectory.len()
    );

    Ok(())
}
