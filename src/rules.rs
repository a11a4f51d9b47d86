/*
 * Flocking Rules Module
 *
 * The four steering rules evaluated for one boid against a snapshot of the
 * whole flock:
 * 1. Cohesion: steer towards the average position of neighbours
 * 2. Alignment: steer towards the average velocity of neighbours
 * 3. Separation: move away from neighbours that are too close
 * 4. Target: steer towards (or away from) the cursor
 *
 * Every function reads positions and velocities as plain slices so the
 * caller decides which buffer is the snapshot.
 */

use nannou::prelude::*;

use crate::params::{SimulationParams, TargetMode, Vision};

/// The rule vectors computed for a single boid in one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Steering {
    pub cohesion: Vec2,
    pub alignment: Vec2,
    pub separation: Vec2,
    pub target: Vec2,
}

impl Steering {
    // Sum of all rules, added to the velocity as-is
    pub fn total(&self) -> Vec2 {
        self.cohesion + self.alignment + self.separation + self.target
    }
}

/// Whether a boid moving with `velocity` sees something at `offset` from it.
///
/// A boid with no velocity has no heading, and an offset of zero has no
/// bearing; both are treated as visible.
pub fn is_visible(velocity: Vec2, offset: Vec2, vision: Vision) -> bool {
    match vision {
        Vision::Omni => true,
        Vision::Cone { half_angle } => {
            let lengths = velocity.length() * offset.length();
            if lengths == 0.0 {
                return true;
            }
            let cos = (velocity.dot(offset) / lengths).clamp(-1.0, 1.0);
            cos.acos() < half_angle
        }
    }
}

/// Collect the neighbours of boid `index` into `out` (cleared first).
///
/// Brute force: every other boid is tested for distance, then for vision.
pub fn neighbours_into(
    positions: &[Vec2],
    velocities: &[Vec2],
    index: usize,
    params: &SimulationParams,
    out: &mut Vec<usize>,
) {
    out.clear();

    let position = positions[index];
    let velocity = velocities[index];
    let radius_sq = params.neighbour_distance_sq();

    for (j, &other) in positions.iter().enumerate() {
        if j == index {
            continue;
        }

        let offset = other - position;
        if offset.length_squared() < radius_sq && is_visible(velocity, offset, params.vision) {
            out.push(j);
        }
    }
}

// Pull towards the centroid of the neighbours
pub fn cohesion(positions: &[Vec2], neighbours: &[usize], index: usize, gain: f32) -> Vec2 {
    if neighbours.is_empty() {
        return Vec2::ZERO;
    }

    let sum = neighbours
        .iter()
        .fold(Vec2::ZERO, |acc, &j| acc + positions[j]);
    let centroid = sum / neighbours.len() as f32;
    (centroid - positions[index]) * gain
}

// Match the mean velocity of the neighbours
pub fn alignment(velocities: &[Vec2], neighbours: &[usize], index: usize, gain: f32) -> Vec2 {
    if neighbours.is_empty() {
        return Vec2::ZERO;
    }

    let sum = neighbours
        .iter()
        .fold(Vec2::ZERO, |acc, &j| acc + velocities[j]);
    let mean = sum / neighbours.len() as f32;
    (mean - velocities[index]) * gain
}

// Push away from every neighbour inside the avoidance distance
pub fn separation(
    positions: &[Vec2],
    neighbours: &[usize],
    index: usize,
    params: &SimulationParams,
) -> Vec2 {
    let position = positions[index];
    let avoidance_sq = params.avoidance_distance_sq();

    let mut push = Vec2::ZERO;
    for &j in neighbours {
        let away = position - positions[j];
        if away.length_squared() < avoidance_sq {
            push += away;
        }
    }

    push * params.separation_gain
}

// Cursor attraction; nothing when the cursor position is unknown
pub fn target(position: Vec2, target: Option<Vec2>, params: &SimulationParams) -> Vec2 {
    let Some(target) = target else {
        return Vec2::ZERO;
    };

    let pull = (target - position) * params.target_gain;
    match params.target_mode {
        TargetMode::Seek => pull,
        TargetMode::Flee => -pull,
    }
}

/// Evaluate all rules for boid `index`.
///
/// `scratch` receives the neighbour list and can be reused across boids.
pub fn steer(
    positions: &[Vec2],
    velocities: &[Vec2],
    index: usize,
    goal: Option<Vec2>,
    params: &SimulationParams,
    scratch: &mut Vec<usize>,
) -> Steering {
    neighbours_into(positions, velocities, index, params, scratch);

    Steering {
        cohesion: cohesion(positions, scratch, index, params.cohesion_gain),
        alignment: alignment(velocities, scratch, index, params.alignment_gain),
        separation: separation(positions, scratch, index, params),
        target: target(positions[index], goal, params),
    }
}
