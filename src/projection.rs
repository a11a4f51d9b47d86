/*
 * Projection Module
 *
 * This module defines the Projection struct that maps simulation space onto
 * the window. Simulation space has its origin in the top-left corner with Y
 * pointing down (the same convention as cursor coordinates); nannou's window
 * space has its origin at the centre with Y pointing up.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Width and height of the visible simulation rectangle.
    pub extent: Vec2,
}

impl Projection {
    pub fn new(extent: Vec2) -> Self {
        Self { extent }
    }

    // Uniform scale that fits the whole extent inside the window
    pub fn scale(&self, window_rect: Rect) -> f32 {
        if self.extent.x <= 0.0 || self.extent.y <= 0.0 {
            return 1.0;
        }
        (window_rect.w() / self.extent.x).min(window_rect.h() / self.extent.y)
    }

    // Convert a point from simulation space to screen space
    pub fn world_to_screen(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let scale = self.scale(window_rect);
        let centred = point - self.extent / 2.0;
        vec2(centred.x, -centred.y) * scale + window_rect.xy()
    }

    // Convert a point from screen space to simulation space
    pub fn screen_to_world(&self, point: Vec2, window_rect: Rect) -> Vec2 {
        let scale = self.scale(window_rect);
        let centred = (point - window_rect.xy()) / scale;
        vec2(centred.x, -centred.y) + self.extent / 2.0
    }
}
