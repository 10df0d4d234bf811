mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use via_stitch::geom::BoundingRange;
use via_stitch::sampling::bridson::BridsonFillStrategy;
use via_stitch::sampling::grid::GridFillStrategy;
use via_stitch::sampling::star::StarFillStrategy;
use via_stitch::sampling::{FillRegion, FillStrategy};

const EXTENT: i64 = 50_000_000;
const SPACINGS: [f64; 4] = [5_000_000.0, 2_540_000.0, 1_270_000.0, 635_000.0];

fn region(spacing: f64) -> FillRegion {
    FillRegion::new(
        BoundingRange::new(0, EXTENT),
        BoundingRange::new(0, EXTENT),
        spacing,
    )
}

fn sampling_grid_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/grid");

    for &spacing in &SPACINGS {
        let strategy =
            GridFillStrategy::try_new(region(spacing), |_: i64, _: i64| true).expect("valid region");
        let mut rng_est = StdRng::seed_from_u64(0xA11CE);
        let expected = strategy.generate_points(&mut rng_est).len();
        group.throughput(common::elements_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0xA11CE);
        group.bench_with_input(BenchmarkId::from_parameter(spacing), &spacing, |b, _| {
            b.iter(|| {
                let pts = strategy.generate_points(&mut rng);
                black_box(pts.len());
            });
        });
    }

    group.finish();
}

fn sampling_star_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/star");

    for &spacing in &SPACINGS {
        let strategy =
            StarFillStrategy::try_new(region(spacing), |_: i64, _: i64| true).expect("valid region");
        let mut rng_est = StdRng::seed_from_u64(0x5747);
        let expected = strategy.generate_points(&mut rng_est).len();
        group.throughput(common::elements_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0x5747);
        group.bench_with_input(BenchmarkId::from_parameter(spacing), &spacing, |b, _| {
            b.iter(|| {
                let pts = strategy.generate_points(&mut rng);
                black_box(pts.len());
            });
        });
    }

    group.finish();
}

fn sampling_bridson_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/bridson");

    for &spacing in &SPACINGS {
        let strategy =
            BridsonFillStrategy::try_new(region(spacing), |_: i64, _: i64| true).expect("valid region");
        let mut rng_est = StdRng::seed_from_u64(0xBEEF ^ spacing as u64);
        let expected = strategy.generate_points(&mut rng_est).len();
        group.throughput(common::elements_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0xC0FFEE ^ spacing as u64);
        group.bench_with_input(BenchmarkId::from_parameter(spacing), &spacing, |b, _| {
            b.iter(|| {
                let pts = strategy.generate_points(&mut rng);
                black_box(pts.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_grid_benches, sampling_star_benches, sampling_bridson_benches
}
criterion_main!(benches);
