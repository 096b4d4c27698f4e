//! Criterion benchmarks for u-gns.
//!
//! Measures grid construction and full layered runs on standard test
//! functions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_gns::gns::{GnsConfig, GnsRunner};
use u_gns::local_search::StochasticLocalSearch;
use u_gns::neighborhood::{GridMode, NeighborhoodGenerator};
use u_gns::objective::CostFunction;
use u_gns::space::BoundingBox;
use u_gns::vns::{VnsConfig, VnsRunner};

// ===========================================================================
// Neighborhood grid
// ===========================================================================

fn bench_neighborhood_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood_grid");

    for &dim in &[2usize, 4, 6] {
        let domain = BoundingBox::uniform(dim, -500.0, 500.0).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(dim), &domain, |b, d| {
            b.iter(|| {
                let cells =
                    NeighborhoodGenerator::generate(black_box(d), dim, 4, GridMode::Truncated);
                black_box(cells)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// VNS on one layer
// ===========================================================================

fn bench_vns_rastrigin(c: &mut Criterion) {
    let mut group = c.benchmark_group("vns_rastrigin");
    group.sample_size(10);

    for &dim in &[2usize, 3] {
        let domain = CostFunction::Rastrigin.default_range(dim).unwrap();
        let cells = NeighborhoodGenerator::generate(&domain, dim, 3, GridMode::Exact).unwrap();
        let config = VnsConfig::default().with_max_iterations(300).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(cells, config),
            |b, (n, cfg)| {
                b.iter(|| {
                    let result = VnsRunner::run(
                        &CostFunction::Rastrigin,
                        black_box(n),
                        &StochasticLocalSearch,
                        black_box(cfg),
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Layered GNS on Schwefel
// ===========================================================================

fn bench_gns_schwefel(c: &mut Criterion) {
    let mut group = c.benchmark_group("gns_schwefel");
    group.sample_size(10);

    for &layers in &[1usize, 2, 4] {
        let config = GnsConfig::default()
            .with_dimension(2)
            .with_num_layers(layers)
            .with_cells_per_dimension(4)
            .with_cost_function(CostFunction::Schwefel)
            .with_vns(VnsConfig::default().with_max_iterations(300).with_seed(42));
        group.bench_with_input(BenchmarkId::from_parameter(layers), &config, |b, cfg| {
            b.iter(|| {
                let result = GnsRunner::run_benchmark(black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_neighborhood_grid,
    bench_vns_rastrigin,
    bench_gns_schwefel
);
criterion_main!(benches);
