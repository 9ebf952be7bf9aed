use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use nbody_quadtree::bodies::{populate, Distribution, MassMode, PointMass};
use nbody_quadtree::gravity::{batched_force, leaf_force, LeafBatch};
use nbody_quadtree::simulation::Simulation;
use nbody_quadtree::utils::{fast_inverse_sqrt, fast_inverse_sqrt_f64, SimulationParams, LEAF_CAPACITY};

pub fn bench_inverse_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse_sqrt");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    group.bench_function("truth_f32", |b| b.iter(|| {
        let mut sum = 0.0_f32;
        for i in 1..101 {
            sum += 1.0 / (black_box(i) as f32).sqrt();
        }
        sum
    }));

    group.bench_function("fast_inverse_sqrt", |b| b.iter(|| {
        let mut sum = 0.0_f32;
        for i in 1..101 {
            sum += fast_inverse_sqrt(black_box(i) as f32);
        }
        sum
    }));

    group.bench_function("truth_f64", |b| b.iter(|| {
        let mut sum = 0.0_f64;
        for i in 1..101 {
            sum += 1.0 / (black_box(i) as f64).sqrt();
        }
        sum
    }));

    group.bench_function("fast_inverse_sqrt_f64", |b| b.iter(|| {
        let mut sum = 0.0_f64;
        for i in 1..101 {
            sum += fast_inverse_sqrt_f64(black_box(i) as f64);
        }
        sum
    }));
}

pub fn bench_leaf_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_kernel");
    let sources: Vec<PointMass> = (0..LEAF_CAPACITY)
        .map(|i| PointMass { x: 0.1 * i as f64, y: 0.05 * i as f64, mass: 1.0 })
        .collect();
    let batch = LeafBatch::from_points(&sources);
    let receiver = PointMass { x: 0.47, y: 0.53, mass: 1.0 };

    group.bench_function("portable", |b| b.iter(|| {
        batched_force(black_box(&receiver), black_box(&batch), 1.0, 1e-3)
    }));

    group.bench_function("dispatched", |b| b.iter(|| {
        leaf_force(black_box(&receiver), black_box(&batch), 1.0, 1e-3)
    }));

    #[cfg(target_arch = "x86_64")]
    if is_x86_feature_detected!("avx2") {
        group.bench_function("avx2", |b| b.iter(|| unsafe {
            nbody_quadtree::gravity::batched_force_avx2(black_box(&receiver), black_box(&batch), 1.0, 1e-3)
        }));
    }
}

pub fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    group.sample_size(20);
    for &count in &[1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(count as u64);
        let bodies = populate(count, Distribution::UnitCircle, MassMode::Random, &mut rng);
        let mut sim = Simulation::new(bodies, SimulationParams::default())
            .expect("Failed to create simulation");
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| sim.step().expect("Tick failed"))
        });
    }
}

criterion_group!(benches, bench_inverse_sqrt, bench_leaf_kernel, bench_tick);
criterion_main!(benches);
