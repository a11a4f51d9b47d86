/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that groups every tunable
 * constant of the flocking rules. The values are compiled in: the Default
 * implementation is the configuration the application runs with, and tests
 * build their own values to isolate a single rule.
 */

use nannou::prelude::*;

/// How a boid decides whether a nearby boid is visible to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Vision {
    /// Every boid inside the neighbour distance is seen.
    Omni,
    /// Only boids within `half_angle` radians of the boid's heading are seen.
    Cone { half_angle: f32 },
}

/// Direction of the cursor rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetMode {
    Seek,
    Flee,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    // Spawn area and initial speed
    pub spawn_bounds: Vec2,
    pub initial_speed: f32,

    // Perception
    pub neighbour_distance: f32,
    pub avoidance_distance: f32,
    pub vision: Vision,

    // Rule gains
    pub cohesion_gain: f32,
    pub alignment_gain: f32,
    pub separation_gain: f32,
    pub target_gain: f32,
    pub target_mode: TargetMode,

    pub max_speed: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            spawn_bounds: vec2(800.0, 800.0),
            initial_speed: 20.0,
            neighbour_distance: 80.0,
            avoidance_distance: 6.0,
            vision: Vision::Cone {
                half_angle: 45.0_f32.to_radians(),
            },
            cohesion_gain: 0.01,
            alignment_gain: 0.125,
            separation_gain: 1.0,
            target_gain: 0.005,
            target_mode: TargetMode::Seek,
            max_speed: 100.0,
        }
    }
}

impl SimulationParams {
    // Same parameters with all-round vision
    pub fn with_omni_vision(self) -> Self {
        Self {
            vision: Vision::Omni,
            ..self
        }
    }

    #[inline]
    pub fn neighbour_distance_sq(&self) -> f32 {
        self.neighbour_distance * self.neighbour_distance
    }

    #[inline]
    pub fn avoidance_distance_sq(&self) -> f32 {
        self.avoidance_distance * self.avoidance_distance
    }
}
