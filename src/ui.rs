/*
 * UI Module
 *
 * The egui panel and the in-frame debug overlay. Simulation parameters are
 * compiled in, so the panel only reports statistics and offers a pause
 * switch.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;

// Build the panel for this frame
pub fn update_ui(egui: &mut Egui, debug_info: &DebugInfo, boid_count: usize, paused: &mut bool) {
    let ctx = egui.begin_frame();

    egui::Window::new("Flock")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            for line in debug_lines(debug_info, boid_count) {
                ui.label(line);
            }

            ui.separator();
            ui.checkbox(paused, "Pause Simulation");
        });
}

// Debug text lines, one per statistic, shared by the panel and the overlay
pub fn debug_lines(debug_info: &DebugInfo, boid_count: usize) -> [String; 5] {
    [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Boids: {}", boid_count),
        format!("Ticks: {} ({}/s)", debug_info.total_ticks, debug_info.ticks_per_second),
        format!("Mean speed: {:.1}", debug_info.mean_speed),
    ]
}

// Draw debug information in the bottom-left corner of the window
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect, boid_count: usize) {
    let margin = 20.0;
    let line_height = 20.0;
    let lines = debug_lines(debug_info, boid_count);

    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.bottom() + panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - i as f32 * line_height;

        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(WHITE)
            .font_size(14);
    }
}
