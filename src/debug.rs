/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame and tick
 * statistics to be displayed in the UI:
 * - FPS (frames per second) and frame time
 * - Simulation ticks per second and in total
 * - Mean boid speed
 */

use std::time::{Duration, Instant};

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_second: u32,
    pub total_ticks: u64,
    pub mean_speed: f32,
    // Ticks counted since `window_start`
    ticks_in_window: u32,
    window_start: Instant,
}

impl DebugInfo {
    pub fn new(now: Instant) -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks_per_second: 0,
            total_ticks: 0,
            mean_speed: 0.0,
            ticks_in_window: 0,
            window_start: now,
        }
    }

    pub fn record_frame(&mut self, fps: f32, frame_time: Duration) {
        self.fps = fps;
        self.frame_time = frame_time;
    }

    pub fn record_tick(&mut self, mean_speed: f32) {
        self.total_ticks += 1;
        self.ticks_in_window += 1;
        self.mean_speed = mean_speed;
    }

    // Roll the one-second tick counter over
    pub fn refresh(&mut self, now: Instant) {
        if now.saturating_duration_since(self.window_start) >= Duration::from_secs(1) {
            self.ticks_per_second = self.ticks_in_window;
            self.ticks_in_window = 0;
            self.window_start = now;
        }
    }
}
