/*
 * Input Module
 *
 * This module handles user input events for the flocking simulation:
 * - Cursor movement sets the target the flock steers towards
 * - Space pauses and resumes the simulation
 * - D shows or hides the debug overlay
 */

use nannou::prelude::*;
use std::time::Instant;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    // The last position is kept when the cursor leaves the window
    model.set_cursor(pos, app.window_rect());
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => model.toggle_pause(Instant::now()),
        Key::D => model.toggle_debug(),
        _ => {}
    }
}

// Pass raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
