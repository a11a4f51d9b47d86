/*
 * Flock Module
 *
 * The simulation state of the whole flock, stored as parallel arrays: the
 * position, velocity and rotation of boid `i` live at index `i` of each
 * array, and every array keeps the same length for the lifetime of the
 * flock.
 *
 * Each tick reads a frozen snapshot of the current arrays and writes the new
 * state into a second set of arrays, which are swapped in at the end, so the
 * result never depends on the order boids are processed in.
 */

use nannou::prelude::{vec2, Mat4, Vec2};
use rand::Rng;

use crate::instance::{boid_triangle, heading_rotation, BoidInstance, InstanceRenderer};
use crate::params::SimulationParams;
use crate::rules::{self, Steering};

pub struct Flock {
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    rotations: Vec<Mat4>,

    // Next-tick buffers, swapped with the current ones after every update
    next_positions: Vec<Vec2>,
    next_velocities: Vec<Vec2>,

    // Instance data staged for the renderer
    instances: Vec<BoidInstance>,

    // Reused neighbour list
    neighbour_scratch: Vec<usize>,

    params: SimulationParams,
}

impl Flock {
    pub fn new(count: usize, params: SimulationParams) -> Self {
        Self::with_rng(count, params, &mut rand::thread_rng())
    }

    /// Build a flock of `count` boids scattered over the spawn area.
    ///
    /// Headings are uniform and speeds are uniform up to the initial speed.
    pub fn with_rng<R: Rng + ?Sized>(count: usize, params: SimulationParams, rng: &mut R) -> Self {
        let bounds = params.spawn_bounds;

        Self::from_agents(
            (0..count).map(|_| {
                let position = vec2(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);

                let heading = rng.gen_range(0.0..std::f32::consts::TAU);
                let speed = rng.gen::<f32>() * params.initial_speed;
                let velocity = vec2(heading.cos(), heading.sin()) * speed;

                (position, velocity)
            }),
            params,
        )
    }

    /// Build a flock from explicit `(position, velocity)` pairs.
    pub fn from_agents<I>(agents: I, params: SimulationParams) -> Self
    where
        I: IntoIterator<Item = (Vec2, Vec2)>,
    {
        let instances: Vec<BoidInstance> = agents
            .into_iter()
            .map(|(position, velocity)| BoidInstance::new(position, velocity))
            .collect();
        let count = instances.len();

        Self {
            positions: instances.iter().map(|i| i.position).collect(),
            velocities: instances.iter().map(|i| i.velocity).collect(),
            rotations: instances.iter().map(|i| i.rotation).collect(),
            next_positions: vec![Vec2::ZERO; count],
            next_velocities: vec![Vec2::ZERO; count],
            instances,
            neighbour_scratch: Vec::new(),
            params,
        }
    }

    /// Advance the flock by one tick of `dt` seconds.
    ///
    /// `target` is the cursor position in simulation space, if known.
    pub fn update(&mut self, dt: f32, target: Option<Vec2>) {
        if self.positions.is_empty() {
            return;
        }

        let Self {
            positions,
            velocities,
            rotations,
            next_positions,
            next_velocities,
            neighbour_scratch,
            params,
            ..
        } = self;

        for i in 0..positions.len() {
            let steering = rules::steer(positions, velocities, i, target, params, neighbour_scratch);

            // Apply the rules, then constrain top speed
            let mut velocity = velocities[i] + steering.total();
            if velocity.length() > params.max_speed {
                velocity = velocity.normalize() * params.max_speed;
            }

            next_velocities[i] = velocity;
            next_positions[i] = positions[i] + velocity * dt;
            rotations[i] = heading_rotation(velocity);
        }

        std::mem::swap(positions, next_positions);
        std::mem::swap(velocities, next_velocities);

        self.stage_instances();

        log::trace!("flock of {} advanced by {:.4}s", self.positions.len(), dt);
    }

    /// Hand the staged instance data to `renderer`.
    ///
    /// Does nothing for an empty flock.
    pub fn draw<R: InstanceRenderer + ?Sized>(&self, renderer: &mut R) {
        if self.instances.is_empty() {
            return;
        }
        renderer.draw_instances(&boid_triangle(), &self.instances);
    }

    // Refresh the renderer-facing copy of the current state
    fn stage_instances(&mut self) {
        self.instances.clear();
        self.instances.extend(
            self.positions
                .iter()
                .zip(&self.velocities)
                .zip(&self.rotations)
                .map(|((&position, &velocity), &rotation)| BoidInstance {
                    position,
                    rotation,
                    velocity,
                }),
        );
    }

    /// Indices of the boids that boid `index` currently counts as neighbours.
    pub fn neighbours(&self, index: usize) -> Vec<usize> {
        let mut out = Vec::new();
        rules::neighbours_into(&self.positions, &self.velocities, index, &self.params, &mut out);
        out
    }

    /// The rule vectors boid `index` would receive from the current state.
    pub fn steering(&self, index: usize, target: Option<Vec2>) -> Steering {
        let mut scratch = Vec::new();
        rules::steer(&self.positions, &self.velocities, index, target, &self.params, &mut scratch)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec2] {
        &self.velocities
    }

    pub fn rotations(&self) -> &[Mat4] {
        &self.rotations
    }

    pub fn instances(&self) -> &[BoidInstance] {
        &self.instances
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    // Average speed across the flock, zero when empty
    pub fn mean_speed(&self) -> f32 {
        if self.velocities.is_empty() {
            return 0.0;
        }
        self.velocities.iter().map(|v| v.length()).sum::<f32>() / self.velocities.len() as f32
    }
}
