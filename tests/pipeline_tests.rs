//! End-to-end tests covering the simulate-then-link pipeline.

use particle_network::{
    NetworkBuilder, Particle, Simulation, SimulationConfig, Vec3,
};

#[test]
fn test_two_particles_link_with_expected_alpha() {
    let config = SimulationConfig::default().with_particle_count(2);
    let positions = [Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)];
    let mut sim = Simulation::with_spawner(config.clone(), |i| {
        Particle::at_rest(positions[i])
    })
    .unwrap();

    sim.update(1.0 / 60.0); // zero velocity, nothing moves

    let mut network = NetworkBuilder::new();
    let segments = network.build(sim.particles(), config.link_radius);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].a, Vec3::ZERO);
    assert_eq!(segments[0].b, Vec3::new(10.0, 0.0, 0.0));
    assert!((segments[0].alpha - 0.75).abs() < 1e-6);
}

#[test]
fn test_wall_reflection_end_to_end() {
    let config = SimulationConfig::default().with_particle_count(1);
    let mut sim = Simulation::with_spawner(config, |_| {
        Particle::new(Vec3::new(149.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0))
    })
    .unwrap();

    sim.update(1.0);

    let p = &sim.particles()[0];
    assert_eq!(p.velocity.x, -10.0);
    assert_eq!(p.position.x, 150.0);
}

#[test]
fn test_network_follows_moving_particles() {
    // Two particles start linked, drift apart, and the link disappears.
    let config = SimulationConfig::default()
        .with_particle_count(2)
        .with_link_radius(40.0);
    let mut sim = Simulation::with_spawner(config.clone(), |i| {
        if i == 0 {
            Particle::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(-20.0, 0.0, 0.0))
        } else {
            Particle::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0))
        }
    })
    .unwrap();

    let mut network = NetworkBuilder::new();
    assert_eq!(network.build(sim.particles(), config.link_radius).len(), 1);

    // After 1s the particles are 60 apart, past the 40 threshold.
    for _ in 0..60 {
        sim.update(1.0 / 60.0);
    }
    assert_eq!(network.build(sim.particles(), config.link_radius).len(), 0);
}

#[test]
fn test_long_run_stays_contained_and_linked_consistently() {
    let config = SimulationConfig::default();
    let mut sim = Simulation::new(config.clone()).unwrap();
    let mut network = NetworkBuilder::new();

    let h = config.half_extent;
    for _ in 0..300 {
        sim.update(1.0 / 60.0);
        let segments = network.build(sim.particles(), config.link_radius);

        // Every link endpoint is a real particle position inside bounds,
        // and every alpha is in (0, 1].
        for seg in segments {
            assert!(seg.alpha > 0.0 && seg.alpha <= 1.0);
            for p in [seg.a, seg.b] {
                assert!(p.x.abs() <= h && p.y.abs() <= h && p.z.abs() <= h);
            }
        }
    }

    for p in sim.particles() {
        assert!(p.position.x.abs() <= h);
        assert!(p.position.y.abs() <= h);
        assert!(p.position.z.abs() <= h);
    }
}
