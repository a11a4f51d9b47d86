/*
 * Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The simulation core (params, rules, flock, instance, timestep) does not
 * depend on a window; the host modules (app, input, renderer, ui, debug)
 * wire it into a nannou application.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use flock::Flock;
pub use instance::{BoidInstance, InstanceRenderer};
pub use params::{SimulationParams, TargetMode, Vision};
pub use projection::Projection;
pub use rules::Steering;
pub use timestep::FixedTimestep;

// Define modules
pub mod app;
pub mod debug;
pub mod flock;
pub mod input;
pub mod instance;
pub mod logging;
pub mod params;
pub mod projection;
pub mod renderer;
pub mod rules;
pub mod timestep;
pub mod ui;

// Constants
pub const BOID_COUNT: usize = 666;
pub const TICK_RATE: u32 = 120;
pub const WINDOW_SIZE: u32 = 800;
pub const WINDOW_TITLE: &str = "Flocking";
