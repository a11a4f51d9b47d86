/*
 * Renderer Module
 *
 * This module handles the rendering of the flock. NannouRenderer receives
 * the flock's instance data and draws the base triangle once per boid,
 * rotated to its heading, placed through the projection and colored by
 * its speed.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::instance::{BoidInstance, InstanceRenderer};
use crate::projection::Projection;
use crate::ui;

pub struct NannouRenderer<'a> {
    draw: &'a Draw,
    projection: Projection,
    window_rect: Rect,
    reference_speed: f32,
}

impl<'a> NannouRenderer<'a> {
    pub fn new(draw: &'a Draw, projection: Projection, window_rect: Rect, reference_speed: f32) -> Self {
        Self {
            draw,
            projection,
            window_rect,
            reference_speed,
        }
    }
}

impl InstanceRenderer for NannouRenderer<'_> {
    fn draw_instances(&mut self, shape: &[Vec2; 3], instances: &[BoidInstance]) {
        for instance in instances {
            let color = instance.color(self.reference_speed);
            let points = shape.iter().map(|&vertex| {
                self.projection
                    .world_to_screen(instance.transform_vertex(vertex), self.window_rect)
            });

            self.draw
                .polygon()
                .color(rgb(color.x, color.y, color.z))
                .points(points);
        }
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let mut renderer = NannouRenderer::new(
        &draw,
        model.projection,
        app.window_rect(),
        model.flock.params().max_speed,
    );
    model.flock.draw(&mut renderer);

    if model.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect(), model.flock.len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw the flock: {err:?}");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw the ui: {err:?}");
    }
}
