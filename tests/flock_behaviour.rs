use flocking::{Flock, SimulationParams, Vision};
use nannou::prelude::{vec2, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

fn three_boids() -> Flock {
    let params = SimulationParams {
        neighbour_distance: 80.0,
        ..SimulationParams::default().with_omni_vision()
    };
    Flock::from_agents(
        [
            (vec2(0.0, 0.0), vec2(1.0, 0.0)),
            (vec2(5.0, 0.0), vec2(1.0, 0.0)),
            (vec2(100.0, 100.0), vec2(0.0, 1.0)),
        ],
        params,
    )
}

#[test]
fn isolated_boid_gets_no_cohesion_or_alignment() {
    let flock = three_boids();

    assert!(flock.neighbours(2).is_empty());
    let steering = flock.steering(2, None);
    assert_eq!(steering.cohesion, Vec2::ZERO);
    assert_eq!(steering.alignment, Vec2::ZERO);
    assert_eq!(steering.separation, Vec2::ZERO);
}

#[test]
fn close_pair_pulls_towards_its_shared_centre() {
    let flock = three_boids();
    let centre = vec2(2.5, 0.0);

    assert_eq!(flock.neighbours(0), vec![1]);
    assert_eq!(flock.neighbours(1), vec![0]);

    for i in 0..2 {
        let cohesion = flock.steering(i, None).cohesion;
        let towards_centre = centre - flock.positions()[i];
        assert!(cohesion.dot(towards_centre) > 0.0);
        assert!(close(cohesion.normalize(), towards_centre.normalize()));
    }
}

#[test]
fn separation_pushes_the_close_pair_apart() {
    let flock = three_boids();

    // Distance 5 is inside the avoidance distance of 6
    assert_eq!(flock.steering(0, None).separation, vec2(-5.0, 0.0));
    assert_eq!(flock.steering(1, None).separation, vec2(5.0, 0.0));
}

#[test]
fn isolated_boid_update_is_exact() {
    let mut flock = three_boids();
    flock.update(0.5, None);

    assert_eq!(flock.velocities()[2], vec2(0.0, 1.0));
    assert_eq!(flock.positions()[2], vec2(100.0, 100.5));
}

#[test]
fn vision_cone_makes_neighbourhood_one_sided() {
    let params = SimulationParams::default();
    assert!(matches!(params.vision, Vision::Cone { .. }));

    // Both fly along +X; the leader is ahead of the follower
    let mut flock = Flock::from_agents(
        [(vec2(0.0, 0.0), vec2(1.0, 0.0)), (vec2(10.0, 0.0), vec2(1.0, 0.0))],
        params,
    );

    assert_eq!(flock.neighbours(0), vec![1]);
    assert!(flock.neighbours(1).is_empty());

    flock.update(1.0 / 120.0, None);
    assert_eq!(flock.len(), 2);
}

#[test]
fn every_boid_reads_the_same_snapshot() {
    let params = SimulationParams::default().with_omni_vision();
    let mut flock = Flock::from_agents(
        [(vec2(0.0, 0.0), vec2(1.0, 0.0)), (vec2(10.0, 0.0), vec2(0.0, 1.0))],
        params,
    );
    flock.update(1.0, None);

    // Both results are computed from the initial state
    assert!(close(flock.velocities()[0], vec2(0.975, 0.125)));
    assert!(close(flock.velocities()[1], vec2(0.025, 0.875)));
    assert!(close(flock.positions()[0], vec2(0.975, 0.125)));
    assert!(close(flock.positions()[1], vec2(10.025, 0.875)));
}

#[test]
fn processing_order_does_not_change_the_outcome() {
    let mut rng = StdRng::seed_from_u64(42);
    let seed_flock = Flock::with_rng(60, SimulationParams::default(), &mut rng);
    let agents: Vec<(Vec2, Vec2)> = seed_flock
        .positions()
        .iter()
        .copied()
        .zip(seed_flock.velocities().iter().copied())
        .collect();

    let target = Some(vec2(400.0, 400.0));
    let mut forward = Flock::from_agents(agents.iter().copied(), *seed_flock.params());
    let mut backward = Flock::from_agents(agents.iter().rev().copied(), *seed_flock.params());
    forward.update(1.0 / 120.0, target);
    backward.update(1.0 / 120.0, target);

    let n = agents.len();
    for i in 0..n {
        // Neighbour sums run in a different order, so allow for rounding
        assert!((forward.velocities()[i] - backward.velocities()[n - 1 - i]).length() < 1e-3);
        assert!((forward.positions()[i] - backward.positions()[n - 1 - i]).length() < 1e-3);
    }
}

#[test]
fn identical_state_gives_bit_identical_updates() {
    let mut rng = StdRng::seed_from_u64(3);
    let template = Flock::with_rng(200, SimulationParams::default(), &mut rng);
    let agents: Vec<(Vec2, Vec2)> = template
        .positions()
        .iter()
        .copied()
        .zip(template.velocities().iter().copied())
        .collect();

    let mut a = Flock::from_agents(agents.clone(), *template.params());
    let mut b = Flock::from_agents(agents, *template.params());

    for _ in 0..20 {
        a.update(1.0 / 120.0, None);
        b.update(1.0 / 120.0, None);
    }

    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.velocities(), b.velocities());
    assert_eq!(a.rotations(), b.rotations());
}

#[test]
fn population_and_speed_hold_over_many_ticks() {
    let mut rng = StdRng::seed_from_u64(11);
    let params = SimulationParams::default();
    let mut flock = Flock::with_rng(300, params, &mut rng);

    for tick in 0..60 {
        // Sweep the cursor around so boids keep accelerating
        let angle = tick as f32 * 0.1;
        let cursor = vec2(400.0, 400.0) + vec2(angle.cos(), angle.sin()) * 350.0;
        flock.update(1.0 / 120.0, Some(cursor));

        assert_eq!(flock.positions().len(), 300);
        assert_eq!(flock.velocities().len(), 300);
        assert_eq!(flock.rotations().len(), 300);
        for v in flock.velocities() {
            assert!(v.length() <= params.max_speed * (1.0 + 1e-5));
            assert!(v.is_finite());
        }
    }
}

#[test]
fn stationary_boid_sees_all_around() {
    let flock = Flock::from_agents(
        [
            (vec2(50.0, 50.0), Vec2::ZERO),
            (vec2(40.0, 50.0), vec2(1.0, 0.0)),
            (vec2(60.0, 60.0), vec2(1.0, 0.0)),
        ],
        SimulationParams::default(),
    );

    assert_eq!(flock.neighbours(0), vec![1, 2]);
}
