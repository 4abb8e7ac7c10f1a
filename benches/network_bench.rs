//! Benchmarks for the CPU-side simulation step and proximity scan.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

use particle_network::{NetworkBuilder, Particle, Simulation, SimulationConfig, Vec3};

fn make_simulation(count: usize) -> Simulation {
    let config = SimulationConfig::default().with_particle_count(count);
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    Simulation::with_spawner(config, |_| {
        Particle::new(
            Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            ),
            Vec3::new(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            ),
        )
    })
    .unwrap()
}

fn bench_simulation_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_update");

    for count in [100, 400, 1600] {
        group.bench_with_input(BenchmarkId::new("particles", count), &count, |b, &count| {
            let mut sim = make_simulation(count);
            b.iter(|| {
                sim.update(1.0 / 60.0);
                black_box(sim.particles());
            })
        });
    }

    group.finish();
}

fn bench_network_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_build");

    for count in [100, 400, 1600] {
        group.bench_with_input(BenchmarkId::new("particles", count), &count, |b, &count| {
            let sim = make_simulation(count);
            let mut network = NetworkBuilder::new();
            b.iter(|| {
                black_box(network.build(sim.particles(), 40.0).len());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulation_update, bench_network_build);
criterion_main!(benches);
