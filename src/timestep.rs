/*
 * Fixed Timestep Module
 *
 * Decouples the simulation rate from the display refresh rate. The flock is
 * advanced by a constant step only once more than that step of wall-clock
 * time has passed since the previous tick; frames in between redraw the
 * same state.
 */

use std::time::{Duration, Instant};

pub struct FixedTimestep {
    step: Duration,
    last_tick: Instant,
    ticks: u64,
    paused: bool,
}

impl FixedTimestep {
    pub fn new(step: Duration, now: Instant) -> Self {
        Self {
            step,
            last_tick: now,
            ticks: 0,
            paused: false,
        }
    }

    // One tick every 1/rate seconds
    pub fn from_rate(rate: u32, now: Instant) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(rate.max(1))), now)
    }

    /// Returns the step in seconds when a tick is due, recording `now` as
    /// the time of that tick.
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        if self.paused {
            return None;
        }

        if now.saturating_duration_since(self.last_tick) > self.step {
            self.last_tick = now;
            self.ticks += 1;
            Some(self.step.as_secs_f32())
        } else {
            None
        }
    }

    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.paused && !paused {
            // Restart the clock so the pause does not count as elapsed time
            self.last_tick = now;
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
