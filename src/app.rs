/*
 * Application Module
 *
 * This module defines the application model for the flocking simulation:
 * one window, one flock and the state that drives it. It handles startup
 * and the per-frame update, advancing the flock on a fixed timestep.
 */

use anyhow::{anyhow, Context};
use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::Instant;

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input;
use crate::params::SimulationParams;
use crate::projection::Projection;
use crate::renderer::view;
use crate::timestep::FixedTimestep;
use crate::ui;
use crate::{BOID_COUNT, TICK_RATE, WINDOW_SIZE, WINDOW_TITLE};

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub timestep: FixedTimestep,
    pub projection: Projection,
    // Last known cursor position in simulation space
    pub cursor: Option<Vec2>,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub show_debug: bool,
}

impl Model {
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if paused == self.timestep.is_paused() {
            return;
        }
        self.timestep.set_paused(paused, now);
        log::info!("simulation {}", if paused { "paused" } else { "resumed" });
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        self.set_paused(!self.timestep.is_paused(), now);
    }

    pub fn toggle_debug(&mut self) {
        self.show_debug = !self.show_debug;
        log::debug!("debug overlay {}", if self.show_debug { "shown" } else { "hidden" });
    }

    // Store the cursor given in window coordinates
    pub fn set_cursor(&mut self, screen_pos: Vec2, window_rect: Rect) {
        self.cursor = Some(self.projection.screen_to_world(screen_pos, window_rect));
    }
}

// Initialize the model, aborting the process if the window cannot be set up
pub fn model(app: &App) -> Model {
    match try_model(app) {
        Ok(model) => model,
        Err(err) => {
            log::error!("startup failed: {err:#}");
            std::process::exit(1);
        }
    }
}

fn try_model(app: &App) -> anyhow::Result<Model> {
    let window_id = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(WINDOW_SIZE, WINDOW_SIZE)
        .view(view)
        .mouse_moved(input::mouse_moved)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .map_err(|err| anyhow!("{err:?}"))
        .context("failed to create the window")?;

    let window = app
        .window(window_id)
        .context("window closed during startup")?;
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();
    let flock = Flock::new(BOID_COUNT, params);
    let now = Instant::now();
    let timestep = FixedTimestep::from_rate(TICK_RATE, now);

    log::info!(
        "spawned {} boids over {}x{}, ticking every {:?}",
        flock.len(),
        params.spawn_bounds.x,
        params.spawn_bounds.y,
        timestep.step()
    );

    Ok(Model {
        flock,
        timestep,
        projection: Projection::new(params.spawn_bounds),
        cursor: None,
        egui,
        debug_info: DebugInfo::new(now),
        show_debug: false,
    })
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    let now = Instant::now();

    model.debug_info.record_frame(app.fps(), update.since_last);
    model.debug_info.refresh(now);

    // The panel can pause or resume the simulation
    model.egui.set_elapsed_time(update.since_start);
    let mut paused = model.timestep.is_paused();
    ui::update_ui(&mut model.egui, &model.debug_info, model.flock.len(), &mut paused);
    model.set_paused(paused, now);

    // At most one tick per frame
    if let Some(dt) = model.timestep.poll(now) {
        model.flock.update(dt, model.cursor);
        model.debug_info.record_tick(model.flock.mean_speed());
    }
}
