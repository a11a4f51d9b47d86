/*
 * Instance Module
 *
 * Per-boid data handed to a renderer once per frame. A renderer draws the
 * same base triangle once per instance, transformed by the instance's
 * rotation and position and colored by its speed.
 */

use nannou::prelude::*;

// Base shape of every boid in simulation units, nose pointing along +X
const BOID_TRIANGLE: [[f32; 2]; 3] = [[-4.0, -4.0], [-4.0, 4.0], [6.0, 0.0]];

// Color of a boid at rest and at the reference speed
const SLOW_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
const FAST_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

pub fn boid_triangle() -> [Vec2; 3] {
    BOID_TRIANGLE.map(Vec2::from)
}

/// Everything a renderer needs to draw one boid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoidInstance {
    pub position: Vec2,
    pub rotation: Mat4,
    pub velocity: Vec2,
}

impl BoidInstance {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            rotation: heading_rotation(velocity),
            velocity,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    // RGB color for this instance given the speed that maps to full red
    pub fn color(&self, reference_speed: f32) -> Vec3 {
        speed_color(self.speed(), reference_speed)
    }

    // Rotate a vertex of the base shape and move it to the boid's position
    pub fn transform_vertex(&self, vertex: Vec2) -> Vec2 {
        let rotated = self.rotation.transform_point3(vec3(vertex.x, vertex.y, 0.0));
        vec2(rotated.x, rotated.y) + self.position
    }
}

/// Rotation about the viewing axis that turns +X onto the velocity's heading.
pub fn heading_rotation(velocity: Vec2) -> Mat4 {
    Mat4::from_rotation_z(velocity.y.atan2(velocity.x))
}

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Interpolate from green to red as `speed` approaches `reference_speed`.
///
/// Speeds at or above the reference are fully red.
pub fn speed_color(speed: f32, reference_speed: f32) -> Vec3 {
    let (slow, fast) = (Vec3::from(SLOW_COLOR), Vec3::from(FAST_COLOR));
    if reference_speed <= 0.0 {
        return fast;
    }

    let t = smoothstep(0.0, 1.0, speed / reference_speed);
    slow.lerp(fast, t)
}

/// Receiver of a flock's per-frame instance data.
///
/// Implementations draw `shape` once per instance, in a single pass.
pub trait InstanceRenderer {
    fn draw_instances(&mut self, shape: &[Vec2; 3], instances: &[BoidInstance]);
}
